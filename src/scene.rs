//! Scroll-scrubbed page effects around the chase sprite: parallax layers, the jet
//! arc, the galaxy drift/clip and video gating.
//!
//! Trigger ranges are measured on `refresh` (boot and resize) with the effect's
//! own transform cleared, then reused on every scroll.

use crate::constants::{GALAXY_SELECTOR, JET_SELECTOR, UNDERWATER_SELECTOR, VIDEO_SELECTOR};
use crate::core::arc::{self, ArcFlight};
use crate::core::clip::{self, clip_inset};
use crate::core::parallax::{self, ParallaxLayer};
use crate::core::trigger::{ScrollRange, TriggerEdge};
use crate::core::visibility::{VideoCommand, VideoGate};
use crate::core::{DeviceProfile, Viewport};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LayerBinding {
    layer: ParallaxLayer,
    element: web::HtmlElement,
    trigger: web::Element,
    range: ScrollRange,
}

struct JetBinding {
    element: web::HtmlElement,
    flight: ArcFlight,
    range: ScrollRange,
}

struct GalaxyBinding {
    element: web::HtmlElement,
    underwater: web::Element,
    ratio: f64,
    range: ScrollRange,
}

struct VideoBinding {
    video: web::HtmlVideoElement,
    gate: VideoGate,
}

pub struct Scene {
    layers: Vec<LayerBinding>,
    jet: Option<JetBinding>,
    galaxy: Option<GalaxyBinding>,
    videos: Vec<VideoBinding>,
    hidden: bool,
}

impl Scene {
    /// Look up every effect's elements; absent ones are skipped individually.
    pub fn bind(document: &web::Document, profile: DeviceProfile) -> Self {
        let mut layers = Vec::new();
        for layer in parallax::default_layers() {
            let element = dom::query_html(document, layer.selector);
            let trigger = dom::query(document, layer.trigger_selector());
            match (element, trigger) {
                (Some(element), Some(trigger)) => layers.push(LayerBinding {
                    layer,
                    element,
                    trigger,
                    range: ScrollRange::default(),
                }),
                _ => log::info!("[scene] parallax layer {} not on page", layer.selector),
            }
        }

        let jet = dom::query_html(document, JET_SELECTOR).map(|element| JetBinding {
            element,
            flight: ArcFlight::new(profile),
            range: ScrollRange::default(),
        });

        let galaxy = match (
            dom::query_html(document, GALAXY_SELECTOR),
            dom::query(document, UNDERWATER_SELECTOR),
        ) {
            (Some(element), Some(underwater)) => Some(GalaxyBinding {
                element,
                underwater,
                ratio: clip::galaxy_ratio(profile),
                range: ScrollRange::default(),
            }),
            _ => None,
        };

        let videos = bind_videos(document);

        log::info!(
            "[scene] layers={} jet={} galaxy={} videos={}",
            layers.len(),
            jet.is_some(),
            galaxy.is_some(),
            videos.len()
        );
        Self {
            layers,
            jet,
            galaxy,
            videos,
            hidden: document.hidden(),
        }
    }

    /// Re-measure trigger ranges for the current layout.
    pub fn refresh(&mut self, offset: f64, viewport: &Viewport) {
        if viewport.is_degenerate() {
            return;
        }
        for b in &mut self.layers {
            dom::set_transform(&b.element, "");
            let span = dom::element_span(&b.trigger, offset);
            b.range = ScrollRange::from_edges(b.layer.start, b.layer.end, span, viewport.height);
        }
        if let Some(jet) = &mut self.jet {
            dom::set_transform(&jet.element, "");
            let span = dom::element_span(&jet.element, offset);
            let (start, end) = arc::trigger_edges();
            jet.range = ScrollRange::from_edges(start, end, span, viewport.height);
        }
        if let Some(g) = &mut self.galaxy {
            dom::set_transform(&g.element, "");
            let span = dom::element_span(&g.underwater, offset);
            g.range = ScrollRange::from_edges(
                TriggerEdge::TOP_BOTTOM,
                TriggerEdge::BOTTOM_TOP,
                span,
                viewport.height,
            );
        }
        self.on_scroll(offset, viewport);
    }

    pub fn on_scroll(&mut self, offset: f64, viewport: &Viewport) {
        if viewport.is_degenerate() {
            return;
        }
        for b in &self.layers {
            let t = b.range.progress(offset);
            dom::set_transform(&b.element, &b.layer.to.sample(t, viewport).to_string());
        }
        if let Some(jet) = &mut self.jet {
            let pose = jet.flight.update(jet.range.progress(offset), viewport);
            dom::set_transform(&jet.element, &jet.flight.css_transform(&pose));
        }
        if let Some(g) = &self.galaxy {
            let y = clip::galaxy_drift(offset, &g.range, g.ratio);
            dom::set_transform(&g.element, &format!("translate(0px,{y:.3}px)"));
            let inset = clip_inset(&dom::client_rect(&g.underwater), viewport);
            dom::set_style(&g.element, "clip-path", &inset.to_string());
        }
        self.update_videos(viewport);
    }

    pub fn on_visibility(&mut self, hidden: bool, viewport: &Viewport) {
        self.hidden = hidden;
        if hidden {
            self.update_videos(viewport);
            return;
        }
        for v in &mut self.videos {
            let rect = dom::client_rect(&v.video);
            let command = v.gate.resume(&rect, viewport);
            v.run(command);
        }
    }

    fn update_videos(&mut self, viewport: &Viewport) {
        for v in &mut self.videos {
            let rect = dom::client_rect(&v.video);
            let command = v.gate.update(&rect, viewport, self.hidden);
            v.run(command);
        }
    }
}

impl VideoBinding {
    fn run(&self, command: Option<VideoCommand>) {
        match command {
            Some(VideoCommand::Play) => {
                // Autoplay may be refused; the promise rejection is not actionable
                _ = self.video.play();
            }
            Some(VideoCommand::Pause) => {
                _ = self.video.pause();
            }
            None => {}
        }
    }
}

fn bind_videos(document: &web::Document) -> Vec<VideoBinding> {
    let Ok(list) = document.query_selector_all(VIDEO_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlVideoElement>().ok())
        .map(|video| {
            _ = video.set_attribute("playsinline", "");
            _ = video.set_attribute("muted", "");
            video.set_muted(true);
            VideoBinding {
                video,
                gate: VideoGate::new(),
            }
        })
        .collect()
}
