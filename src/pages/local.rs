use super::{Block, Document, PageView, RenderContext};
use crate::state::Page;

pub struct LocalPage;
pub static PAGE: LocalPage = LocalPage;

impl PageView for LocalPage {
    fn page(&self) -> Page {
        Page::LocalEnvironment
    }

    fn render(&self, ctx: &RenderContext) -> Document {
        let s = &ctx.strings.local;
        Document {
            page: Page::LocalEnvironment,
            blocks: vec![
                Block::Heading(s.title),
                Block::Markdown(s.body),
                Block::Rule,
                Block::Button {
                    label: s.button,
                    target: Page::DataArchitecture,
                },
            ],
        }
    }
}
