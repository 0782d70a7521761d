//! 2D-canvas background dots and the floating hero labels.

use crate::dom;
use crate::events::add_window_listener;
use crate::frame;
use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::Rc;
use visuals_core::constants::{HERO_CONTAINER_ID, PARTICLES_CANVAS_ID, PARTICLE_COUNT};
use visuals_core::{FloatPhase, ParticleField};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const DATA_POINTS: [(&str, &str); 3] = [
    ("Purity", "99.9%"),
    ("Viscosity", "High"),
    ("Temp", "36.5°C"),
];

fn viewport() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (dim(w.inner_width()), dim(w.inner_height()))
}

fn fit_to_viewport(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (width, height) = viewport();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

fn draw(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
    for p in field.particles() {
        ctx.set_global_alpha(p.alpha as f64);
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU as f64);
        ctx.set_fill_style_str(&format!("#{:06x}", p.color));
        ctx.fill();
    }
}

/// Drift dots across `#bg-particles`; does nothing when the page lacks it.
pub fn install_particles() -> anyhow::Result<()> {
    let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(PARTICLES_CANVAS_ID))
    else {
        log::debug!("[particles] no #{} on this page", PARTICLES_CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into()
        .map_err(|el| anyhow::anyhow!("#{} is a <{}>", PARTICLES_CANVAS_ID, el.tag_name()))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = fit_to_viewport(&canvas);
    let seed = js_sys::Math::random().to_bits();
    let field = Rc::new(RefCell::new(ParticleField::new(
        PARTICLE_COUNT,
        width,
        height,
        seed,
    )));

    let resized = field.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (width, height) = fit_to_viewport(&canvas);
        resized.borrow_mut().resize(width, height);
    }) as Box<dyn FnMut()>);
    add_window_listener("resize", &closure);
    closure.forget();

    frame::start_loop(move || {
        let mut field = field.borrow_mut();
        draw(&ctx, &field);
        field.step();
        true
    });
    log::info!("[particles] {} dots at {}x{}", PARTICLE_COUNT, width, height);
    Ok(())
}

/// Add the bobbing data labels to `#hero-3d-sphere`, if present.
pub fn install_data_points() -> anyhow::Result<()> {
    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    let Some(container) = document.get_element_by_id(HERO_CONTAINER_ID) else {
        log::debug!("[hero] no #{} on this page", HERO_CONTAINER_ID);
        return Ok(());
    };

    let mut labels = Vec::with_capacity(DATA_POINTS.len());
    for (i, (label, value)) in DATA_POINTS.iter().enumerate() {
        let el: web::HtmlElement = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        el.set_class_name("hero-data-point glass");
        el.set_inner_html(&format!("<strong>{label}</strong><span>{value}</span>"));
        let style = el.style();
        for (prop, val) in [
            ("position", "absolute".to_string()),
            ("left", format!("{}%", 20 + i * 30)),
            ("top", format!("{}%", 30 + i * 20)),
            ("padding", "10px 20px".to_string()),
            ("border-radius", "15px".to_string()),
            ("font-size", "0.8rem".to_string()),
            ("z-index", "15".to_string()),
            ("opacity", "0.7".to_string()),
        ] {
            _ = style.set_property(prop, &val);
        }
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let phase = FloatPhase::new(js_sys::Math::random() as f32 * TAU);
        labels.push((el, phase));
    }

    frame::start_loop(move || {
        for (el, phase) in labels.iter_mut() {
            let offset = phase.step();
            _ = el
                .style()
                .set_property("transform", &format!("translateY({offset}px)"));
        }
        true
    });
    Ok(())
}
