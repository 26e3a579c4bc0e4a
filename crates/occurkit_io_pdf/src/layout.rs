//! Page-layout port and its lopdf implementation.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use crate::conf::{C_FONT_RESOURCE_BOLD, C_FONT_RESOURCE_REGULAR};
use crate::spec::SpecPageGeometry;
use crate::util::{encode_win_ansi, measure_text_width, replace_unencodable, wrap_text};

/// Primitive operations needed to lay out a labeled record.
pub trait PageLayout {
    /// Centered bold heading.
    fn add_title(&mut self, text: &str);
    /// Bold label followed by a single-line value on the same row.
    fn add_labeled_line(&mut self, label: &str, value: &str);
    /// Bold label followed by a word-wrapped value that may span pages.
    fn add_labeled_paragraph(&mut self, label: &str, value: &str);
    /// Serialize the finished document.
    fn finish(self) -> Result<Vec<u8>, String>
    where
        Self: Sized;
}

/// Text-only A4 layout on the standard Helvetica fonts.
#[derive(Debug)]
pub struct PdfPageLayout {
    geometry: SpecPageGeometry,
    l_pages: Vec<Vec<Operation>>,
    l_ops_current: Vec<Operation>,
    /// Cursor measured from the page top.
    y_cursor: f32,
}

impl Default for PdfPageLayout {
    fn default() -> Self {
        Self::new(SpecPageGeometry::default())
    }
}

impl PdfPageLayout {
    pub fn new(geometry: SpecPageGeometry) -> Self {
        let y_cursor = geometry.margin_top;
        Self {
            geometry,
            l_pages: Vec::new(),
            l_ops_current: Vec::new(),
            y_cursor,
        }
    }

    /// Pages laid out so far, including the one in progress.
    pub fn page_count(&self) -> usize {
        self.l_pages.len() + 1
    }

    fn break_page_if_needed(&mut self, n_height: f32) {
        if self.y_cursor + n_height > self.geometry.y_limit() {
            let l_ops_done = std::mem::take(&mut self.l_ops_current);
            self.l_pages.push(l_ops_done);
            self.y_cursor = self.geometry.margin_top;
        }
    }

    /// Emit `text` in a cell of `n_height` at the cursor row, vertically centered.
    fn push_text(&mut self, x: f32, n_height: f32, text: &str, font_size: f32, if_bold: bool) {
        let c_font = if if_bold {
            C_FONT_RESOURCE_BOLD
        } else {
            C_FONT_RESOURCE_REGULAR
        };
        let y_baseline_top = self.y_cursor + 0.5 * n_height + 0.3 * font_size;
        let y_pdf = self.geometry.height_page - y_baseline_top;

        self.l_ops_current.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![c_font.into(), font_size.into()]),
            Operation::new("Td", vec![x.into(), y_pdf.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Draw `label:` and return the x where the value column starts.
    fn push_label(&mut self, label: &str) -> f32 {
        let c_label = format!("{}:", replace_unencodable(label));
        let n_size = self.geometry.font_size_body;
        let n_width_label = measure_text_width(&c_label, n_size, true) + self.geometry.gap_label_value;
        let x_label = self.geometry.margin_left;

        self.push_text(x_label, self.geometry.height_line, &c_label, n_size, true);
        x_label + f32::max(self.geometry.width_label_min, n_width_label)
    }

    fn build_document(&self, l_pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, String> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let font_bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                C_FONT_RESOURCE_REGULAR => font_regular_id,
                C_FONT_RESOURCE_BOLD => font_bold_id,
            },
        });

        let mut l_kids: Vec<Object> = Vec::with_capacity(l_pages.len());
        for operations in l_pages {
            let v_content = Content { operations }
                .encode()
                .map_err(|err| format!("pdf content encode error: {err}"))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, v_content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            l_kids.push(page_id.into());
        }

        let n_pages = l_kids.len() as i64;
        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(self.geometry.width_page),
            Object::Real(self.geometry.height_page),
        ];
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => l_kids,
                "Count" => n_pages,
                "Resources" => resources_id,
                "MediaBox" => media_box,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut v_bytes: Vec<u8> = Vec::new();
        doc.save_to(&mut v_bytes)
            .map_err(|err| format!("pdf write error: {err}"))?;
        Ok(v_bytes)
    }
}

impl PageLayout for PdfPageLayout {
    fn add_title(&mut self, text: &str) {
        let c_text = replace_unencodable(text);
        let n_size = self.geometry.font_size_title;
        let n_height = self.geometry.height_title;
        self.break_page_if_needed(n_height);

        let n_width = measure_text_width(&c_text, n_size, true);
        let x = f32::max(
            self.geometry.margin_left,
            (self.geometry.width_page - n_width) / 2.0,
        );
        self.push_text(x, n_height, &c_text, n_size, true);
        self.y_cursor += n_height + self.geometry.gap_after_title;
    }

    fn add_labeled_line(&mut self, label: &str, value: &str) {
        let n_height = self.geometry.height_line;
        self.break_page_if_needed(n_height);

        let x_value = self.push_label(label);
        let c_value = replace_unencodable(value);
        self.push_text(x_value, n_height, &c_value, self.geometry.font_size_body, false);
        self.y_cursor += n_height;
    }

    fn add_labeled_paragraph(&mut self, label: &str, value: &str) {
        let n_height = self.geometry.height_line;
        let n_size = self.geometry.font_size_body;
        self.break_page_if_needed(n_height);

        let x_value = self.push_label(label);
        let n_width_value = f32::max(self.geometry.x_limit() - x_value, n_size);
        let l_lines = wrap_text(&replace_unencodable(value), n_width_value, n_size);

        for c_line in &l_lines {
            self.break_page_if_needed(n_height);
            self.push_text(x_value, n_height, c_line, n_size, false);
            self.y_cursor += n_height;
        }
        self.y_cursor += self.geometry.gap_after_paragraph;
    }

    fn finish(mut self) -> Result<Vec<u8>, String> {
        let mut l_pages = std::mem::take(&mut self.l_pages);
        l_pages.push(std::mem::take(&mut self.l_ops_current));
        self.build_document(l_pages)
    }
}

#[cfg(test)]
mod tests {
    use lopdf::Document;

    use super::*;

    #[test]
    fn finished_layout_is_a_loadable_pdf() {
        let mut layout = PdfPageLayout::default();
        layout.add_title("Relatório de Ocorrência");
        layout.add_labeled_line("Tipo", "Incidente");
        layout.add_labeled_paragraph("Descricao", "teste (com parênteses)");

        let v_bytes = layout.finish().expect("finish");
        assert!(v_bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&v_bytes).expect("load");
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn long_paragraph_continues_on_new_pages() {
        let mut layout = PdfPageLayout::default();
        layout.add_title("Relatório de Ocorrência");
        layout.add_labeled_paragraph("Descricao", &"palavra longa ".repeat(2000));
        assert!(layout.page_count() > 1);

        let n_pages_expected = layout.page_count();
        let v_bytes = layout.finish().expect("finish");
        let doc = Document::load_mem(&v_bytes).expect("load");
        assert_eq!(doc.get_pages().len(), n_pages_expected);
    }

    #[test]
    fn cursor_never_passes_the_bottom_limit() {
        let geometry = SpecPageGeometry::default();
        let n_limit = geometry.y_limit();
        let mut layout = PdfPageLayout::new(geometry);
        for idx in 0..200 {
            layout.add_labeled_line(&format!("campo {idx}"), "valor");
            assert!(layout.y_cursor <= n_limit);
        }
        assert!(layout.page_count() > 1);
    }
}
