//! PageLayout → finished PDF bytes, via base-14 Helvetica faces and
//! zlib-deflated content streams.

use crate::dossier::layout::{self, Block, PageLayout};
use crate::dossier::metrics::to_winansi;
use crate::dossier::DossierError;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};
use std::io::Write;

const MM_TO_PT: f32 = 72.0 / 25.4;

/// Portfolio palette.
const ACCENT: (u8, u8, u8) = (121, 85, 88); // #795558
const BACKGROUND: (u8, u8, u8) = (252, 246, 239); // #FCF6EF
const BODY_GRAY: (u8, u8, u8) = (60, 60, 60);
const WHITE: (u8, u8, u8) = (255, 255, 255);

const FONT_REGULAR: Name = Name(b"F1");
const FONT_BOLD: Name = Name(b"F2");

fn mm(v: f32) -> f32 {
    v * MM_TO_PT
}

/// Layout measures from the page top; PDF user space runs from the bottom.
fn from_top(y: f32) -> f32 {
    (layout::PAGE_HEIGHT - y) * MM_TO_PT
}

fn set_fill(content: &mut Content, (r, g, b): (u8, u8, u8)) {
    content.set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
}

fn set_stroke(content: &mut Content, (r, g, b): (u8, u8, u8)) {
    content.set_stroke_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
}

fn show_text(content: &mut Content, font: Name, size: f32, x: f32, y: f32, text: &str) {
    content
        .begin_text()
        .set_font(font, size)
        .next_line(mm(x), from_top(y))
        .show(Str(&to_winansi(text)))
        .end_text();
}

fn paint_background(content: &mut Content) {
    set_fill(content, BACKGROUND);
    content.rect(0.0, 0.0, mm(layout::PAGE_WIDTH), mm(layout::PAGE_HEIGHT));
    content.fill_nonzero();
}

fn paint_header(content: &mut Content, generated_on: &str) {
    set_fill(content, ACCENT);
    content.rect(
        0.0,
        from_top(layout::HEADER_BAND_HEIGHT),
        mm(layout::PAGE_WIDTH),
        mm(layout::HEADER_BAND_HEIGHT),
    );
    content.fill_nonzero();

    set_fill(content, WHITE);
    show_text(
        content,
        FONT_BOLD,
        layout::TITLE_SIZE,
        layout::MARGIN_LEFT,
        25.0,
        layout::DOC_TITLE,
    );
    show_text(
        content,
        FONT_REGULAR,
        layout::HEADER_META_SIZE,
        150.0,
        25.0,
        layout::STUDIO_NAME,
    );
    show_text(
        content,
        FONT_REGULAR,
        layout::HEADER_META_SIZE,
        150.0,
        32.0,
        &format!("Gerado em: {}", generated_on),
    );
}

fn paint_block(content: &mut Content, block: &Block) {
    match block {
        Block::SectionTitle { text, y } => {
            set_fill(content, ACCENT);
            show_text(
                content,
                FONT_BOLD,
                layout::SECTION_TITLE_SIZE,
                layout::MARGIN_LEFT,
                *y,
                text,
            );
        }
        Block::Rule { y } => {
            set_stroke(content, ACCENT);
            content.set_line_width(mm(layout::RULE_WIDTH));
            content.move_to(mm(layout::MARGIN_LEFT), from_top(*y));
            content.line_to(mm(layout::RULE_RIGHT), from_top(*y));
            content.stroke();
        }
        Block::Field {
            label,
            lines,
            y,
            height: _,
        } => {
            set_fill(content, BODY_GRAY);
            show_text(
                content,
                FONT_BOLD,
                layout::BODY_SIZE,
                layout::MARGIN_LEFT,
                *y,
                &format!("{}:", label),
            );
            for (i, line) in lines.iter().enumerate() {
                show_text(
                    content,
                    FONT_REGULAR,
                    layout::BODY_SIZE,
                    layout::VALUE_COLUMN,
                    *y + i as f32 * layout::LINE_HEIGHT,
                    line,
                );
            }
        }
        Block::Footer { y } => {
            set_fill(content, ACCENT);
            show_text(
                content,
                FONT_REGULAR,
                layout::FOOTER_SIZE,
                layout::MARGIN_LEFT,
                *y,
                layout::FOOTER_TEXT,
            );
        }
    }
}

/// Assemble the document: one content stream per page, shared font
/// resources, every page repainted from the background up.
pub fn render(doc: &PageLayout) -> Result<Vec<u8>, DossierError> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let regular_id = alloc();
    let bold_id = alloc();

    let n = doc.pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (i, page) in doc.pages.iter().enumerate() {
        let mut content = Content::new();
        paint_background(&mut content);
        if i == 0 {
            paint_header(&mut content, &doc.generated_on);
        }
        for block in &page.blocks {
            paint_block(&mut content, block);
        }

        let raw = content.finish();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(6));
        encoder.write_all(&raw)?;
        let compressed = encoder.finish()?;
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(
            0.0,
            0.0,
            mm(layout::PAGE_WIDTH),
            mm(layout::PAGE_HEIGHT),
        ))
        .parent(pages_id)
        .contents(content_ids[i]);
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(FONT_REGULAR, regular_id);
        fonts.pair(FONT_BOLD, bold_id);
    }

    Ok(pdf.finish())
}
