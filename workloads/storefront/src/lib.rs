//! DSIGNER'S storefront: shell-first streaming SSR on Spin.
//!
//! - `GET`/`HEAD` on a page route streams the page: shell, then sections
//! - `POST /wishlist` toggles a product and redirects back
//! - Unknown paths get the not-found page; other methods get 405

mod config;
mod respond;
mod store;

use anyhow::{anyhow, Context};
use http::StatusCode;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use dsigner_cache::Wishlist;
use dsigner_core::{Headers, RequestContext, SiteConfig};
use dsigner_observability::StructuredLogger;
use dsigner_site::prelude::*;
use dsigner_streaming::StreamingSink;

use respond::{empty_headers, is_form, page_headers, redirect_headers, HeaderList};

/// Storefront request handler.
#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_default();
    let headers: Headers = req
        .headers()
        .entries()
        .into_iter()
        .map(|(name, value)| (name, String::from_utf8_lossy(&value).into_owned()))
        .collect();
    let ctx = RequestContext::new(core_method(&req.method()), &path).with_headers(headers);

    let (config, config_error) = config::load_config();
    let logger = StructuredLogger::from_config(ctx.request_id.clone(), &config.logging)
        .with_workload(config.workload.clone())
        .with_route(ctx.path.clone());
    if let Some(e) = config_error {
        logger
            .warn_builder("site config invalid, using defaults")
            .field("error", e.to_string())
            .emit();
    }

    let result = match ctx.method {
        dsigner_core::Method::Get | dsigner_core::Method::Head => {
            serve_page(&ctx, &config, &logger, response_out).await
        }
        dsigner_core::Method::Post if ctx.path == TOGGLE_PATH => {
            serve_toggle(req, &ctx, &config, &logger, response_out).await
        }
        _ => send_empty(response_out, &ctx, StatusCode::METHOD_NOT_ALLOWED),
    };

    if let Err(e) = result {
        logger
            .error_builder("request failed")
            .field("error", format!("{:#}", e))
            .emit();
    }
}

fn core_method(method: &Method) -> dsigner_core::Method {
    match method {
        Method::Get => dsigner_core::Method::Get,
        Method::Head => dsigner_core::Method::Head,
        Method::Post => dsigner_core::Method::Post,
        _ => dsigner_core::Method::Other,
    }
}

/// Render and stream a page.
async fn serve_page(
    ctx: &RequestContext,
    config: &SiteConfig,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    let route = ctx.route();
    let state = PageState::from_query(&ctx.query);
    let wishlist = match route {
        Some(route) if route.shows_wishlist() => {
            store::load_wishlist(store::open_wishlist(&config.storage), logger)
        }
        _ => Wishlist::default(),
    };
    let content = SiteContent::default();
    let render_ctx = RenderContext::new(config, &content, &state, &wishlist);

    let page = match build_page(route, &render_ctx) {
        Ok(page) => page,
        Err(e) => {
            send_empty(response_out, ctx, StatusCode::INTERNAL_SERVER_ERROR)?;
            return Err(e).context("page composition failed");
        }
    };

    let status = StatusCode::from_u16(page.status).context("page status")?;
    let response = new_response(status, &page_headers(ctx, page.cache_control()))?;
    let body = response.take_body();
    response_out.set(response);

    if ctx.method == dsigner_core::Method::Head {
        return Ok(());
    }

    let mut sink = StreamingSink::new(body, ctx.timing.clone());
    sink.send_shell(&page.opening())
        .await
        .context("failed to send shell")?;

    // Once the shell is out, keep going so the document still closes.
    if let Err(e) = sink.send_sections(&page.sections).await {
        logger
            .warn_builder("section streaming failed")
            .field("error", e.to_string())
            .emit();
    }
    sink.finish(&page.closing())
        .await
        .context("failed to close page")?;

    let mut entry = logger
        .info_builder("page served")
        .field_i64("status", i64::from(page.status))
        .field_i64("sections", sink.sections_sent().len() as i64)
        .duration_ms("elapsed_ms", sink.timing().elapsed());
    if let Some(shell) = sink.timing().time_to_shell() {
        entry = entry.duration_ms("shell_ms", shell);
    }
    entry.emit();

    Ok(())
}

/// Apply a wishlist toggle and redirect back to the page it came from.
async fn serve_toggle(
    req: IncomingRequest,
    ctx: &RequestContext,
    config: &SiteConfig,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    if !is_form(ctx.header("content-type")) {
        logger.warn("wishlist toggle with non-form body");
        return send_empty(response_out, ctx, StatusCode::BAD_REQUEST);
    }

    let body = req
        .into_body()
        .await
        .map_err(|e| anyhow!("failed to read request body: {:?}", e))?;
    let request = match ToggleRequest::from_form(&String::from_utf8_lossy(&body)) {
        Ok(request) => request,
        Err(e) => {
            logger
                .warn_builder("rejected wishlist form")
                .field("error", e.to_string())
                .emit();
            return send_empty(response_out, ctx, StatusCode::BAD_REQUEST);
        }
    };

    let outcome = store::open_wishlist(&config.storage)
        .and_then(|store| apply_toggle(&store, &request));
    match outcome {
        Ok(liked) => logger
            .info_builder("wishlist toggled")
            .field_i64("product_id", request.id.value())
            .field_bool("liked", liked)
            .emit(),
        // The visitor is still sent back; the page shows the last stored state.
        Err(e) => logger
            .error_builder("wishlist toggle failed")
            .field_i64("product_id", request.id.value())
            .field("error", e.to_string())
            .emit(),
    }

    let response = new_response(
        StatusCode::SEE_OTHER,
        &redirect_headers(ctx, &request.return_to),
    )?;
    response_out.set(response);
    Ok(())
}

fn send_empty(
    response_out: ResponseOutparam,
    ctx: &RequestContext,
    status: StatusCode,
) -> anyhow::Result<()> {
    let response = new_response(status, &empty_headers(ctx, status))?;
    response_out.set(response);
    Ok(())
}

fn new_response(status: StatusCode, headers: &HeaderList) -> anyhow::Result<OutgoingResponse> {
    let fields =
        Fields::from_list(headers).map_err(|e| anyhow!("invalid response headers: {:?}", e))?;
    let response = OutgoingResponse::new(fields);
    response
        .set_status_code(status.as_u16())
        .map_err(|()| anyhow!("invalid status code {}", status))?;
    Ok(response)
}
