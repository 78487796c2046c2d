use crate::constants::{CONTAINER_SELECTOR, DUST_CANVAS_ID, NETWORK_CANVAS_ID};
use crate::core::{transform_css, Rgba, Surface, Translate};
use crate::dom;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `<canvas>` with its transparent 2D context.
pub struct CanvasLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasLayer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Look up `#id`; `None` if the element or its context is unavailable.
    pub fn find(document: &web::Document, id: &str) -> Option<Self> {
        let canvas = dom::canvas_by_id(document, id)?;
        match Self::new(canvas) {
            Ok(layer) => Some(layer),
            Err(e) => {
                log::debug!("[backdrop] #{id}: {e:?}");
                None
            }
        }
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"alpha".into(), &true.into())
        .map_err(|e| anyhow::anyhow!("context options: {:?}", e))?;
    canvas
        .get_context_with_context_options("2d", &options)
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Both layers or nothing.
pub fn find_layers(document: &web::Document) -> Option<(CanvasLayer, CanvasLayer)> {
    let network = CanvasLayer::find(document, NETWORK_CANVAS_ID)?;
    let dust = CanvasLayer::find(document, DUST_CANVAS_ID)?;
    Some((network, dust))
}

impl Surface for CanvasLayer {
    fn clear(&mut self, width: u32, height: u32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }
}

/// Foreground element that follows the parallax offset.
pub struct ContainerStyle {
    el: web::HtmlElement,
}

impl ContainerStyle {
    pub fn find(document: &web::Document) -> Option<Self> {
        dom::html_element(document, CONTAINER_SELECTOR).map(|el| Self { el })
    }
}

impl Translate for ContainerStyle {
    fn translate(&mut self, offset: Vec2) {
        _ = self
            .el
            .style()
            .set_property("transform", &transform_css(offset));
    }
}
