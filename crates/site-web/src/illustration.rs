use crate::constants::ILLUSTRATION_REVEAL_DELAY_MS;
use crate::dom;
use crate::events::{Listener, Timeout};
use site_core::iso::{Illustration, Variant};
use site_core::projects;
use site_core::svg;
use std::rc::Rc;
use web_sys as web;

struct Drawing {
    document: web::Document,
    illustration: Illustration,
    prefix: String,
}

impl Drawing {
    /// Retarget every layer and path; the CSS transitions written by
    /// `svg::render` animate the change.
    fn show(&self, variant: Variant) {
        let (layers, paths) = svg::variant_updates(&self.illustration, variant, &self.prefix);
        for (id, transform) in layers {
            if let Some(el) = self.document.get_element_by_id(&id) {
                dom::set_attr(&el, "transform", &transform);
            }
        }
        for (id, attrs) in paths {
            if let Some(el) = self.document.get_element_by_id(&id) {
                dom::set_attr(&el, "stroke", &attrs.stroke);
                dom::set_attr(&el, "opacity", &attrs.opacity);
                dom::set_attr(&el, "stroke-dashoffset", &attrs.dash_offset);
            }
        }
    }
}

/// An isometric drawing living inside a host element. Hovering the host
/// plays the hover variant.
pub struct MountedIllustration {
    host: web::Element,
    _reveal: Option<Timeout>,
    _listeners: Vec<Listener>,
}

impl MountedIllustration {
    /// Render `kind` (see [`projects::illustration`]) into `#element_id`.
    /// Under reduced motion the drawing appears at rest with no draw-in.
    pub fn mount(element_id: &str, kind: &str, prefix: String, reduced_motion: bool) -> anyhow::Result<Self> {
        let document = dom::document()?;
        let host = dom::element_by_id(&document, element_id)?;
        let illustration = projects::illustration(kind);
        let initial = if reduced_motion { Variant::Rest } else { Variant::Hidden };
        host.set_inner_html(&svg::render(&illustration, initial, &prefix));
        log::info!(
            "[illustration] {kind} in #{element_id}: {} paths",
            illustration.path_count()
        );

        let drawing = Rc::new(Drawing {
            document,
            illustration,
            prefix,
        });
        let reveal = if reduced_motion {
            None
        } else {
            let drawing = drawing.clone();
            Some(Timeout::new(ILLUSTRATION_REVEAL_DELAY_MS, move || {
                drawing.show(Variant::Rest)
            })?)
        };

        let mut listeners = Vec::with_capacity(2);
        {
            let drawing = drawing.clone();
            listeners.push(Listener::new(&host, "pointerenter", move |_| {
                drawing.show(Variant::Hover)
            })?);
        }
        listeners.push(Listener::new(&host, "pointerleave", move |_| {
            drawing.show(Variant::Rest)
        })?);

        Ok(Self {
            host,
            _reveal: reveal,
            _listeners: listeners,
        })
    }
}

impl Drop for MountedIllustration {
    fn drop(&mut self) {
        self.host.set_inner_html("");
    }
}
