use clap::Args;
use log::LevelFilter;
use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

#[derive(Args, Clone, Debug)]
pub struct WindowConfig {
    /// Window title
    #[arg(long, default_value = "Hello World")]
    pub title: String,

    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Log level for this workspace's crates (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl WindowConfig {
    pub fn window_attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height))
    }
}
