use super::{Block, Document, PageView, RenderContext};
use crate::state::Page;

pub const DIAGRAM_IMAGE: &str = "arquitetura.png";

pub struct ArchitecturePage;
pub static PAGE: ArchitecturePage = ArchitecturePage;

impl PageView for ArchitecturePage {
    fn page(&self) -> Page {
        Page::DataArchitecture
    }

    fn render(&self, ctx: &RenderContext) -> Document {
        let s = &ctx.strings.architecture;
        Document {
            page: Page::DataArchitecture,
            blocks: vec![
                Block::Heading(s.title),
                Block::Markdown(s.body),
                Block::Image {
                    file: DIAGRAM_IMAGE,
                    caption: s.diagram_caption,
                },
                Block::Rule,
                Block::Button {
                    label: s.button,
                    target: Page::Overview,
                },
            ],
        }
    }
}
