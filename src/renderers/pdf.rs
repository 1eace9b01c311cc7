//! Single-page PDF export
//!
//! Writes a landscape A4 page with one embedded RGB image placed at the top
//! left, scaled to the page width with its aspect ratio preserved. The
//! image is stored uncompressed (`/DeviceRGB`, 8 bits per component).

use std::io::Write;

use crate::errors::ExportError;

/// A4 long edge in points
pub const A4_LONG_PT: f32 = 841.89;

/// A4 short edge in points
pub const A4_SHORT_PT: f32 = 595.28;

/// Page geometry and image placement in points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagePlacement {
    pub page_width: f32,
    pub page_height: f32,
    pub image_width: f32,
    pub image_height: f32,
}

impl PagePlacement {
    /// Landscape A4 page with the image scaled to the full page width
    pub fn landscape_a4(pixel_width: u32, pixel_height: u32) -> Result<Self, ExportError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ExportError::EmptySnapshot {
                width: pixel_width,
                height: pixel_height,
            });
        }
        let page_width = A4_LONG_PT;
        let image_height = pixel_height as f32 * page_width / pixel_width as f32;
        Ok(Self {
            page_width,
            page_height: A4_SHORT_PT,
            image_width: page_width,
            image_height,
        })
    }

    /// Bottom edge of the image in PDF user space (origin at bottom left)
    pub fn image_bottom(&self) -> f32 {
        self.page_height - self.image_height
    }
}

/// Packed RGB pixels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbImage {
    /// Convert canvas RGBA pixels, compositing transparent areas onto white
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, ExportError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ExportError::Encode(format!(
                "expected {} RGBA bytes for {}x{}, got {}",
                expected,
                width,
                height,
                rgba.len()
            )));
        }

        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for px in rgba.chunks_exact(4) {
            let alpha = px[3] as u32;
            for &channel in &px[..3] {
                let blended = (channel as u32 * alpha + 255 * (255 - alpha)) / 255;
                data.push(blended as u8);
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }
}

/// Serialize a single-page PDF embedding `image`
///
/// The pixels are stored as an unfiltered RGB stream, three bytes per
/// pixel, so the file grows with the snapshot area.
pub fn write_image_pdf<W: Write>(out: &mut W, image: &RgbImage) -> Result<(), ExportError> {
    let placement = PagePlacement::landscape_a4(image.width, image.height)?;
    let mut writer = PdfWriter::new();

    writer.object(1, b"<< /Type /Catalog /Pages 2 0 R >>");
    writer.object(2, b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    let page = format!(
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
         /Resources << /XObject << /Im0 5 0 R >> >> /Contents 4 0 R >>",
        placement.page_width, placement.page_height
    );
    writer.object(3, page.as_bytes());

    let content = format!(
        "q {:.2} 0 0 {:.2} 0 {:.2} cm /Im0 Do Q",
        placement.image_width,
        placement.image_height,
        placement.image_bottom()
    );
    writer.stream(4, "", content.as_bytes());

    let image_dict = format!(
        "/Type /XObject /Subtype /Image /Width {} /Height {} \
         /ColorSpace /DeviceRGB /BitsPerComponent 8",
        image.width, image.height
    );
    writer.stream(5, &image_dict, &image.data);

    out.write_all(&writer.finish())?;
    log::info!(
        "PDF written: {}x{} px image on {:.2}x{:.2} pt page",
        image.width,
        image.height,
        placement.page_width,
        placement.page_height
    );
    Ok(())
}

/// Minimal PDF object writer tracking cross-reference offsets
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        // Header plus a binary comment so transfer tools treat the file as binary
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    fn begin(&mut self, id: usize) {
        debug_assert_eq!(id, self.offsets.len() + 1, "objects must be written in order");
        self.offsets.push(self.buf.len());
        self.buf.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        self.begin(id);
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, dict_entries: &str, data: &[u8]) {
        self.begin(id);
        let dict = if dict_entries.is_empty() {
            format!("<< /Length {} >>\nstream\n", data.len())
        } else {
            format!("<< {} /Length {} >>\nstream\n", dict_entries, data.len())
        };
        self.buf.extend_from_slice(dict.as_bytes());
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let count = self.offsets.len() + 1;
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", count);
        for offset in &self.offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            count, xref_offset
        ));
        self.buf.extend_from_slice(xref.as_bytes());
        self.buf
    }
}
