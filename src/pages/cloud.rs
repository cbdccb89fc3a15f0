use super::{Block, Document, PageView, RenderContext};
use crate::state::Page;

pub struct CloudPage;
pub static PAGE: CloudPage = CloudPage;

impl PageView for CloudPage {
    fn page(&self) -> Page {
        Page::CloudEnvironment
    }

    fn render(&self, ctx: &RenderContext) -> Document {
        let s = &ctx.strings.cloud;
        Document {
            page: Page::CloudEnvironment,
            blocks: vec![
                Block::Heading(s.title),
                Block::Markdown(s.body),
                Block::Rule,
                Block::Subheader(s.ready_heading),
                Block::Button {
                    label: s.button,
                    target: Page::LocalEnvironment,
                },
            ],
        }
    }
}
