//! Shell-first streaming sink.

use std::fmt::Display;

use dsigner_core::{LifecyclePhase, TimingContext};
use futures::{Sink, SinkExt};

use crate::error::WorkloadError;
use crate::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Completed,
}

/// Streaming sink that enforces the shell-first order.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell opening. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => {}
            SinkState::ShellSent => return Err(WorkloadError::ShellAlreadySent),
            SinkState::Completed => return Err(WorkloadError::Completed),
        }

        self.timing.mark("shell_start");
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send sections in order, stopping at the first failure.
    pub async fn send_sections(&mut self, sections: &[Section]) -> Result<(), WorkloadError> {
        for section in sections {
            self.send_section(&section.name, &section.html).await?;
        }
        Ok(())
    }

    /// Send the shell closing and complete the response.
    pub async fn finish(&mut self, closing: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;
        self.write(closing.as_bytes().to_vec()).await?;
        self.complete()
    }

    /// Mark the response complete. Later sends fail.
    pub fn complete(&mut self) -> Result<(), WorkloadError> {
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => Err(WorkloadError::ShellNotSent),
            SinkState::ShellSent => Ok(()),
            SinkState::Completed => Err(WorkloadError::Completed),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        self.inner
            .send(bytes)
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))
    }

    /// Names of the sections sent so far.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match self.state {
            SinkState::Initial => LifecyclePhase::Start,
            SinkState::ShellSent => self
                .sections_sent
                .last()
                .map(|name| LifecyclePhase::SectionSent(name.clone()))
                .unwrap_or(LifecyclePhase::ShellSent),
            SinkState::Completed => LifecyclePhase::Completion,
        }
    }

    /// Timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::StreamExt;

    fn channel_sink() -> (
        StreamingSink<mpsc::UnboundedSender<Vec<u8>>, mpsc::SendError>,
        mpsc::UnboundedReceiver<Vec<u8>>,
    ) {
        let (tx, rx) = mpsc::unbounded();
        (StreamingSink::new(tx, TimingContext::new()), rx)
    }

    async fn drain(
        sink: StreamingSink<mpsc::UnboundedSender<Vec<u8>>, mpsc::SendError>,
        rx: mpsc::UnboundedReceiver<Vec<u8>>,
    ) -> String {
        drop(sink);
        let chunks: Vec<Vec<u8>> = rx.collect().await;
        String::from_utf8(chunks.concat()).unwrap()
    }

    #[tokio::test]
    async fn test_section_before_shell_is_rejected() {
        let (mut sink, _rx) = channel_sink();
        let err = sink.send_section("hero", "<section>").await.unwrap_err();
        assert!(matches!(err, WorkloadError::ShellNotSent));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[tokio::test]
    async fn test_shell_then_sections_in_order() {
        let (mut sink, rx) = channel_sink();
        sink.send_shell("<html>").await.unwrap();
        assert_eq!(sink.phase(), LifecyclePhase::ShellSent);

        sink.send_sections(&[
            Section::new("nav", "<nav></nav>"),
            Section::new("hero", "<section></section>"),
        ])
        .await
        .unwrap();
        assert_eq!(sink.phase(), LifecyclePhase::SectionSent("hero".into()));
        assert_eq!(sink.sections_sent(), ["nav".to_string(), "hero".to_string()]);

        sink.finish("</html>").await.unwrap();
        assert_eq!(sink.phase(), LifecyclePhase::Completion);
        assert!(sink.timing().time_to_shell().is_some());
        assert!(sink.timing().section_timing("nav").is_some());

        let body = drain(sink, rx).await;
        assert_eq!(body, "<html><nav></nav><section></section></html>");
    }

    #[tokio::test]
    async fn test_second_shell_is_rejected() {
        let (mut sink, _rx) = channel_sink();
        sink.send_shell("<html>").await.unwrap();
        let err = sink.send_shell("<html>").await.unwrap_err();
        assert!(matches!(err, WorkloadError::ShellAlreadySent));
    }

    #[tokio::test]
    async fn test_send_after_completion_fails() {
        let (mut sink, _rx) = channel_sink();
        sink.send_shell("<html>").await.unwrap();
        sink.complete().unwrap();
        let err = sink.send_section("late", "x").await.unwrap_err();
        assert!(matches!(err, WorkloadError::Completed));
    }

    #[tokio::test]
    async fn test_closed_channel_reports_stream_error() {
        let (mut sink, rx) = channel_sink();
        drop(rx);
        let err = sink.send_shell("<html>").await.unwrap_err();
        assert!(matches!(err, WorkloadError::StreamError(_)));
    }
}
