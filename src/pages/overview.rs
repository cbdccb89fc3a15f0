use super::{Block, Document, PageView, RenderContext};
use crate::state::Page;
use crate::tables::TableKind;

/// Folder layout of the pipeline repository.
///
pub const FOLDER_TREE: &str = "\
├── data_pipeline_project/
│   ├── dags/
│   │   ├── dag_data_creation.py
│   │   └── dag_data_transformation.py
│   ├── spark-scripts/
│   │   ├── create/
│   │   │   ├── logins.py
│   │   │   ├── user_country.py
│   │   │   └── user_info.py
│   │   └── transform-load/
│   │       ├── first_time_login.py
│   │       └── login_agg_date.py
│   ├── sql-scripts/
│   │   ├── copy_table/
│   │   │   ├── copy_first_time_login.sql
│   │   │   └── copy_login_agg_date.sql
│   │   └── create_table/
│   │       ├── first_time_login.sql
│   │       ├── login_agg_date.sql
│   │       ├── logins.sql
│   │       ├── user_country.sql
│   │       └── user_info.sql
│   ├── utilitys/
│   │   ├── __init__.py
│   │   ├── connections.py
│   │   └── slack_notifications.py
│   ├── .env
│   ├── docker-compose.yml
│   ├── Dockerfile.airflow
│   ├── requirements.txt
│   └── README.md";

pub const SLACK_IMAGE: &str = "logs_slack.png";

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

impl PageView for OverviewPage {
    fn page(&self) -> Page {
        Page::Overview
    }

    fn render(&self, ctx: &RenderContext) -> Document {
        let s = &ctx.strings.overview;
        Document {
            page: Page::Overview,
            blocks: vec![
                Block::Heading(s.title),
                Block::Markdown(s.intro),
                Block::Image {
                    file: SLACK_IMAGE,
                    caption: s.slack_caption,
                },
                Block::Rule,
                Block::Markdown(s.objective),
                Block::Rule,
                Block::Markdown(s.login_aggregate),
                ctx.table_block(TableKind::LoginAggregate),
                Block::Markdown(s.first_time_login),
                ctx.table_block(TableKind::FirstTimeLogin),
                Block::Markdown(s.reminder),
                Block::Rule,
                Block::Subheader(s.folder_heading),
                Block::Code(FOLDER_TREE),
                Block::Rule,
                Block::Subheader(s.ready_heading),
                Block::Button {
                    label: s.button,
                    target: Page::CloudEnvironment,
                },
            ],
        }
    }
}
