//! Client runtime that plays a `RevealManifest` in the browser.
//!
//! The runtime mirrors `RevealCoordinator`: load triggers play once,
//! enter triggers use IntersectionObserver with the threshold line as the
//! root margin, scrub triggers follow scroll position, and everything is
//! released on `pagehide`. It also drives the navigation scrolled state,
//! the mobile menu, the testimonial carousel and pointer effects.

use crate::reveal::MANIFEST_ELEMENT_ID;

const RUNTIME_JS: &str = r#"(function () {
  var data = document.getElementById('__MANIFEST_ID__');
  if (!data) return;
  var manifest;
  try { manifest = JSON.parse(data.textContent); } catch (e) { return; }

  var EASE = {
    'linear': 'linear',
    'power2.out': 'cubic-bezier(0.215, 0.61, 0.355, 1)',
    'power2.inOut': 'cubic-bezier(0.645, 0.045, 0.355, 1)',
    'power3.out': 'cubic-bezier(0.165, 0.84, 0.44, 1)'
  };
  var EDGE = { top: 0, center: 0.5, bottom: 1 };
  var cleanups = [];
  var reduced = window.matchMedia && window.matchMedia('(prefers-reduced-motion: reduce)').matches;

  function frame(s) {
    var f = {};
    if (s.opacity !== undefined) f.opacity = s.opacity;
    var t = [];
    if (s.x !== undefined || s.y !== undefined) t.push('translate(' + (s.x || 0) + 'px, ' + (s.y || 0) + 'px)');
    if (s.scale !== undefined) t.push('scale(' + s.scale + ')');
    if (t.length) f.transform = t.join(' ');
    if (s.left_pct !== undefined) f.left = s.left_pct + '%';
    return f;
  }

  function apply(el, s) {
    var f = frame(s);
    for (var k in f) el.style[k] = f[k];
  }

  function keyframes(tw) {
    var ease = EASE[tw.ease] || 'linear';
    if (!(tw.repeat_delay > 0)) return { frames: [frame(tw.from), frame(tw.to)], easing: ease };
    // hold at `from` for the rest, then play: the hold repeats with every pass
    var hold = frame(tw.from);
    hold.offset = tw.repeat_delay / (tw.repeat_delay + tw.duration);
    hold.easing = ease;
    return { frames: [frame(tw.from), hold, frame(tw.to)], easing: 'linear' };
  }

  function play(els, tw, paused) {
    var k = keyframes(tw);
    return els.map(function (el, i) {
      var a = el.animate(k.frames, {
        duration: (tw.repeat_delay + tw.duration) * 1000,
        delay: (tw.delay + tw.stagger * i) * 1000,
        easing: k.easing,
        iterations: tw.repeat < 0 ? Infinity : tw.repeat + 1,
        direction: tw.yoyo ? 'alternate' : 'normal',
        fill: 'both'
      });
      if (paused) a.pause();
      return a;
    });
  }

  function all(sel) { return Array.prototype.slice.call(document.querySelectorAll(sel)); }

  manifest.triggers.forEach(function (t) {
    var els = all(t.target);
    if (!els.length) return;
    if (reduced && !t.tween.scrub) { els.forEach(function (el) { apply(el, t.tween.to); }); return; }

    if (t.kind === 'load') { play(els, t.tween, false); return; }

    if (t.kind === 'enter') {
      els.forEach(function (el) { apply(el, t.tween.from); });
      var margin = '0px 0px -' + Math.round((1 - t.threshold.offset) * 100) + '% 0px';
      var io = new IntersectionObserver(function (entries) {
        var batch = entries.filter(function (e) { return e.isIntersecting; }).map(function (e) { return e.target; });
        if (!batch.length) return;
        play(batch, t.tween, false);
        if (t.once) batch.forEach(function (el) { io.unobserve(el); });
      }, { rootMargin: margin, threshold: EDGE[t.threshold.edge] || 0 });
      els.forEach(function (el) { io.observe(el); });
      cleanups.push(function () { io.disconnect(); });
      return;
    }

    if (t.kind === 'scrub') {
      var anims = play(els, t.tween, true);
      var total = t.tween.duration * 1000;
      var onScroll = function () {
        var vh = window.innerHeight;
        els.forEach(function (el, i) {
          var r = el.getBoundingClientRect();
          var top = r.top + window.scrollY;
          var from = top + r.height * EDGE[t.start.edge] - vh * t.start.offset;
          var to = top + r.height * EDGE[t.end.edge] - vh * t.end.offset;
          var p = to > from ? (window.scrollY - from) / (to - from) : (window.scrollY >= to ? 1 : 0);
          anims[i].currentTime = Math.min(1, Math.max(0, p)) * total;
        });
      };
      window.addEventListener('scroll', onScroll, { passive: true });
      onScroll();
      cleanups.push(function () { window.removeEventListener('scroll', onScroll); });
    }
  });

  var nav = document.querySelector('[data-nav]');
  if (nav) {
    var onNavScroll = function () { nav.classList.toggle('scrolled', window.scrollY > manifest.nav_scrolled_at); };
    window.addEventListener('scroll', onNavScroll, { passive: true });
    onNavScroll();
    cleanups.push(function () { window.removeEventListener('scroll', onNavScroll); });
  }

  var toggle = document.querySelector('[data-menu-toggle]');
  var menu = document.getElementById('mobile-menu');
  if (toggle && menu) {
    toggle.addEventListener('click', function () {
      var open = menu.classList.toggle('open');
      toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    });
  }

  var c = manifest.carousel;
  var root = c && document.querySelector(c.target);
  if (root) {
    var slides = root.querySelectorAll('[data-slide]');
    var dots = root.querySelectorAll('[data-slide-to]');
    var active = c.start, animating = false, timer = null;

    var show = function (index) {
      if (animating || index === active || index < 0 || index >= c.len) return;
      animating = true;
      var out = slides[active], next = slides[index];
      var fade = out.animate([{ opacity: 1 }, { opacity: 0 }], { duration: c.transition_ms * 3 / 7, fill: 'forwards' });
      fade.onfinish = function () {
        out.hidden = true;
        fade.cancel();
        next.hidden = false;
        next.animate([{ opacity: 0, transform: 'translateY(20px)' }, { opacity: 1, transform: 'none' }], { duration: c.transition_ms * 4 / 7 }).onfinish = function () { animating = false; };
      };
      dots.forEach(function (d, i) { d.classList.toggle('active', i === index); });
      active = index;
    };
    var restart = function () {
      if (timer) clearInterval(timer);
      timer = setInterval(function () { if (!animating) show((active + 1) % c.len); }, c.interval_ms);
    };
    var go = function (index) { return function (e) { e.preventDefault(); show(index()); restart(); }; };

    var prev = root.querySelector('[data-carousel-prev]');
    var next = root.querySelector('[data-carousel-next]');
    if (prev) prev.addEventListener('click', go(function () { return (active + c.len - 1) % c.len; }));
    if (next) next.addEventListener('click', go(function () { return (active + 1) % c.len; }));
    dots.forEach(function (d) {
      d.addEventListener('click', go(function () { return parseInt(d.getAttribute('data-slide-to'), 10); }));
    });
    restart();
    cleanups.push(function () { clearInterval(timer); timer = null; });
  }

  (manifest.pointer || []).forEach(function (p) {
    var el = document.querySelector(p.target);
    if (!el || reduced) return;
    var listen = function (node, type, fn) {
      node.addEventListener(type, fn);
      cleanups.push(function () { node.removeEventListener(type, fn); });
    };

    if (p.kind === 'tilt') {
      var area = document.querySelector(p.area);
      var spot = p.spotlight ? document.querySelector(p.spotlight) : null;
      if (!area) return;
      el.style.transition = 'transform 1s ' + EASE['power2.out'];
      listen(area, 'mousemove', function (e) {
        if (window.innerWidth < p.min_width) return;
        var cx = window.innerWidth / 2, cy = window.innerHeight / 2;
        var x = (e.clientX - cx) * p.damping, y = (e.clientY - cy) * p.damping;
        el.style.transform = 'perspective(1000px) rotateX(' + (y / cy * p.range_deg) + 'deg) rotateY(' + (-x / cx * p.range_deg) + 'deg)';
        if (spot) spot.style.background = 'radial-gradient(600px circle at ' + (50 + x * 0.01) + '% ' + (50 + y * 0.01) + '%, rgba(201, 169, 97, 0.08) 0%, transparent 70%)';
      });
      return;
    }

    if (p.kind === 'magnetic') {
      listen(el, 'mousemove', function (e) {
        var r = el.getBoundingClientRect();
        el.style.transition = 'transform 0.3s ' + EASE['power2.out'];
        el.style.transform = 'translate(' + (e.clientX - r.left - r.width / 2) * p.pull + 'px, ' + (e.clientY - r.top - r.height / 2) * p.pull + 'px)';
      });
      listen(el, 'mouseleave', function () {
        el.style.transition = 'transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1)';
        el.style.transform = 'translate(0px, 0px)';
      });
    }
  });

  window.addEventListener('pagehide', function () {
    cleanups.splice(0).forEach(function (fn) { fn(); });
  });
})();"#;

/// The runtime script, bound to the manifest element id.
pub fn runtime_script() -> String {
    RUNTIME_JS.replace("__MANIFEST_ID__", MANIFEST_ELEMENT_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_reads_manifest_element() {
        let js = runtime_script();
        assert!(js.contains("getElementById('motion-manifest')"));
        assert!(!js.contains("__MANIFEST_ID__"));
    }

    #[test]
    fn test_carousel_fade_out_is_cancelled() {
        let js = runtime_script();
        let start = js.find("var fade = out.animate(").unwrap();
        let body = &js[start..start + js[start..].find("};").unwrap()];
        assert!(body.contains("out.hidden = true;"));
        assert!(body.contains("fade.cancel();"));
        // the only forwards fill in the script is the one cancelled above
        assert_eq!(js.matches("fill: 'forwards'").count(), 1);
    }

    #[test]
    fn test_repeat_delay_becomes_a_hold_keyframe() {
        let js = runtime_script();
        assert!(js.contains("hold.offset = tw.repeat_delay / (tw.repeat_delay + tw.duration)"));
        assert!(js.contains("duration: (tw.repeat_delay + tw.duration) * 1000"));
    }

    #[test]
    fn test_pointer_effects_use_inline_transforms() {
        let js = runtime_script();
        assert!(js.contains("manifest.pointer || []"));
        assert!(js.contains("window.innerWidth < p.min_width"));
        assert!(js.contains("'mouseleave'"));
        assert!(js.contains("node.removeEventListener(type, fn)"));
    }

    #[test]
    fn test_runtime_releases_on_pagehide() {
        let js = runtime_script();
        assert!(js.contains("'pagehide'"));
        assert!(js.contains("io.disconnect()"));
        assert!(js.contains("clearInterval(timer)"));
    }
}
