//! Fixed-size page layout. Coordinates are millimetres from the top-left of
//! an A4 portrait page; the renderer converts to PDF user space.

use crate::dossier::section::Section;
use crate::dossier::wrap;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const HEADER_BAND_HEIGHT: f32 = 45.0;

pub const MARGIN_LEFT: f32 = 20.0;
pub const RULE_RIGHT: f32 = 190.0;
pub const VALUE_COLUMN: f32 = 70.0;

/// Content start below the header band on page one; plain top margin after.
pub const FIRST_PAGE_TOP: f32 = 60.0;
pub const TOP_MARGIN: f32 = 20.0;
/// A section title is never started below this line.
pub const SECTION_FLOOR: f32 = 240.0;
/// No field block may extend past this line.
pub const BODY_FLOOR: f32 = 275.0;
pub const FOOTER_Y: f32 = 285.0;

pub const WRAP_WIDTH: f32 = 120.0;
pub const LINE_HEIGHT: f32 = 6.0;
pub const BLOCK_PADDING: f32 = 4.0;
pub const SECTION_GAP: f32 = 10.0;
pub const TITLE_TO_RULE: f32 = 5.0;
pub const RULE_TO_BODY: f32 = 10.0;
pub const RULE_WIDTH: f32 = 0.5;

pub const TITLE_SIZE: f32 = 26.0;
pub const HEADER_META_SIZE: f32 = 10.0;
pub const SECTION_TITLE_SIZE: f32 = 14.0;
pub const BODY_SIZE: f32 = 10.0;
pub const FOOTER_SIZE: f32 = 8.0;

pub const DOC_TITLE: &str = "BRIEFING ESTRATÉGICO";
pub const STUDIO_NAME: &str = "ANNA DESIGNER GRÁFICO";
pub const FOOTER_TEXT: &str =
    "Este documento é confidencial e pertence ao processo criativo de Anna Designer.";

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    SectionTitle { text: String, y: f32 },
    Rule { y: f32 },
    Field {
        label: String,
        lines: Vec<String>,
        y: f32,
        height: f32,
    },
    Footer { y: f32 },
}

#[derive(Debug, Clone)]
pub struct Page {
    /// Where the next block would land, in mm from the page top.
    pub cursor: f32,
    pub blocks: Vec<Block>,
}

impl Page {
    fn starting_at(cursor: f32) -> Self {
        Page {
            cursor,
            blocks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    pub generated_on: String,
    pub pages: Vec<Page>,
}

/// Lay the sections onto pages. A block never straddles the body floor and
/// never gets dropped; overflow opens a fresh page instead. The disclaimer
/// footer lands on the final page only.
pub fn paginate(sections: &[Section], generated_on: &str) -> PageLayout {
    let mut pages: Vec<Page> = Vec::new();
    let mut page = Page::starting_at(FIRST_PAGE_TOP);

    for section in sections {
        if page.cursor > SECTION_FLOOR {
            pages.push(std::mem::replace(&mut page, Page::starting_at(TOP_MARGIN)));
        }
        let y = page.cursor;
        page.blocks.push(Block::SectionTitle {
            text: section.title.to_uppercase(),
            y,
        });
        page.blocks.push(Block::Rule { y: y + TITLE_TO_RULE });
        page.cursor = y + TITLE_TO_RULE + RULE_TO_BODY;

        for entry in &section.entries {
            let lines = wrap::wrap(&entry.value, WRAP_WIDTH, BODY_SIZE);
            let height = lines.len() as f32 * LINE_HEIGHT + BLOCK_PADDING;
            if page.cursor + height > BODY_FLOOR {
                pages.push(std::mem::replace(&mut page, Page::starting_at(TOP_MARGIN)));
            }
            let y = page.cursor;
            page.blocks.push(Block::Field {
                label: entry.label.to_string(),
                lines,
                y,
                height,
            });
            page.cursor += height;
        }

        page.cursor += SECTION_GAP;
    }

    page.blocks.push(Block::Footer { y: FOOTER_Y });
    pages.push(page);

    PageLayout {
        generated_on: generated_on.to_string(),
        pages,
    }
}
