//! Export operations for the WASM API
//!
//! This module rasterizes the tab onto an offscreen canvas and exports it:
//! - PNG: the canvas' own PNG encoding, downloaded as `bass-tab.png`
//! - PDF: canvas pixels embedded in a landscape page, downloaded as `bass-tab.pdf`
//!
//! Label editors are hidden while the snapshot is taken and restored
//! afterwards. Failures are logged and returned as a retry notice.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, HtmlAnchorElement,
    HtmlCanvasElement, Url,
};

use crate::api::helpers::lock_editor;
use crate::errors::ExportError;
use crate::models::config::FontMetrics;
use crate::renderers::pdf::{write_image_pdf, RgbImage};
use crate::renderers::snapshot::{RunKind, SnapshotLayout};
use crate::{wasm_error, wasm_info, wasm_log};

pub const PNG_FILENAME: &str = "bass-tab.png";
pub const PDF_FILENAME: &str = "bass-tab.pdf";

const BACKGROUND: &str = "#ffffff";
const FOREGROUND: &str = "#000000";

// ============================================================================
// PNG Export
// ============================================================================

/// Export the tab as a PNG image
///
/// # Parameters
/// - `download`: trigger a `bass-tab.png` download
///
/// # Returns
/// PNG data URL
#[wasm_bindgen(js_name = exportPng)]
pub fn export_png(download: bool) -> Result<String, JsValue> {
    wasm_info!("exportPng called (download={})", download);
    run_export(|| {
        let (_, canvas) = capture()?;
        let data_url = canvas
            .to_data_url()
            .map_err(|e| ExportError::Encode(format!("{:?}", e)))?;
        if download {
            trigger_download(&document()?, &data_url, PNG_FILENAME)?;
        }
        wasm_log!("  PNG data URL: {} bytes", data_url.len());
        Ok(data_url)
    })
}

// ============================================================================
// PDF Export
// ============================================================================

/// Export the tab as a single landscape PDF page
///
/// # Parameters
/// - `download`: trigger a `bass-tab.pdf` download
///
/// # Returns
/// PDF bytes
#[wasm_bindgen(js_name = exportPdf)]
pub fn export_pdf(download: bool) -> Result<js_sys::Uint8Array, JsValue> {
    wasm_info!("exportPdf called (download={})", download);
    run_export(|| {
        let (context, canvas) = capture()?;
        let (width, height) = (canvas.width(), canvas.height());
        let pixels = context
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .map_err(|e| ExportError::Capture(format!("{:?}", e)))?;
        let image = RgbImage::from_rgba(width, height, &pixels.data().0)?;

        let mut pdf = Vec::new();
        write_image_pdf(&mut pdf, &image)?;
        wasm_log!("  PDF: {} bytes", pdf.len());

        let bytes = js_sys::Uint8Array::from(pdf.as_slice());
        if download {
            download_bytes(&bytes, "application/pdf", PDF_FILENAME)?;
        }
        Ok(bytes)
    })
}

// ============================================================================
// Capture
// ============================================================================

/// Convert export failures into a logged, user-facing retry notice
fn run_export<T>(export: impl FnOnce() -> Result<T, ExportError>) -> Result<T, JsValue> {
    export().map_err(|e| {
        wasm_error!("Export error: {}", e);
        JsValue::from_str(&e.user_message())
    })
}

/// Draw the current tab onto a fresh canvas with label editors hidden
fn capture() -> Result<(CanvasRenderingContext2d, HtmlCanvasElement), ExportError> {
    let (layout, font) = {
        let mut editor = lock_editor().map_err(|e| ExportError::Capture(format!("{:?}", e)))?;
        let scope = editor.capture_scope();
        let font = scope.editor().config().font.clone();
        (SnapshotLayout::compute(&scope.sections(), &font), font)
    };
    wasm_log!(
        "  Snapshot {}x{} with {} text runs",
        layout.width,
        layout.height,
        layout.runs.len()
    );

    let document = document()?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| ExportError::Canvas(format!("{:?}", e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ExportError::Canvas("element is not a canvas".to_string()))?;
    canvas.set_width(layout.width);
    canvas.set_height(layout.height);

    let context = canvas
        .get_context("2d")
        .map_err(|e| ExportError::Canvas(format!("{:?}", e)))?
        .ok_or_else(|| ExportError::Canvas("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ExportError::Canvas("unexpected context type".to_string()))?;

    draw(&context, &layout, &font)?;
    Ok((context, canvas))
}

fn draw(
    context: &CanvasRenderingContext2d,
    layout: &SnapshotLayout,
    font: &FontMetrics,
) -> Result<(), ExportError> {
    context.set_fill_style_str(BACKGROUND);
    context.fill_rect(0.0, 0.0, layout.width as f64, layout.height as f64);

    context.set_fill_style_str(FOREGROUND);
    context.set_text_baseline("top");

    for run in &layout.runs {
        match run.kind {
            RunKind::Label => context.set_font(&font.css_label_font()),
            RunKind::TabLine => context.set_font(&font.css_font()),
        }
        context
            .fill_text(&run.text, run.x as f64, run.y as f64)
            .map_err(|e| ExportError::Capture(format!("{:?}", e)))?;
    }
    Ok(())
}

// ============================================================================
// Downloads
// ============================================================================

fn document() -> Result<Document, ExportError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ExportError::NoDocument)
}

fn trigger_download(document: &Document, href: &str, filename: &str) -> Result<(), ExportError> {
    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Encode(format!("{:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Encode("element is not an anchor".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.click();
    wasm_info!("  Download triggered: {}", filename);
    Ok(())
}

fn download_bytes(bytes: &js_sys::Uint8Array, mime: &str, filename: &str) -> Result<(), ExportError> {
    let parts = js_sys::Array::of1(bytes);
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| ExportError::Encode(format!("{:?}", e)))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| ExportError::Encode(format!("{:?}", e)))?;

    let result = trigger_download(&document()?, &url, filename);
    if let Err(e) = Url::revoke_object_url(&url) {
        wasm_log!("  revokeObjectURL failed: {:?}", e);
    }
    result
}
