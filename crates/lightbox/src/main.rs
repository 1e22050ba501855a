pub mod app;
pub mod key_binds;
pub mod localize;
pub mod message;

use app::Lightbox;
use std::path::PathBuf;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(480.0)
            .min_height(360.0),
    );

    // A folder, or a file to open first
    let start = std::env::args().nth(1).map(PathBuf::from);

    cosmic::app::run::<Lightbox>(settings, start)
}
