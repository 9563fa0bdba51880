//! Startup banner

use console::style;
use pyinit_core::SettingsStore;
use tracing::debug;

use crate::version::VersionInfo;

const ASCII_ART: &str = r"
██████╗ ██╗   ██╗██╗███╗   ██╗██╗████████╗
██╔══██╗╚██╗ ██╔╝██║████╗  ██║██║╚══██╔══╝
██████╔╝ ╚████╔╝ ██║██╔██╗ ██║██║   ██║
██╔═══╝   ╚██╔╝  ██║██║╚██╗██║██║   ██║
██║        ██║   ██║██║ ╚████║██║   ██║
╚═╝        ╚═╝   ╚═╝╚═╝  ╚═══╝╚═╝   ╚═╝
";

const TAGLINE: &str = "🚀 Interactive Python Project Scaffolding Tool";

/// Print the banner unless disabled in `~/.pyinitrc`.
///
/// Any failure to read settings just skips the banner.
pub fn show_if_enabled() {
    let settings = match SettingsStore::default_location().and_then(|store| store.load_or_init())
    {
        Ok(settings) => settings,
        Err(e) => {
            debug!("Skipping banner: {}", e);
            return;
        }
    };

    if settings.show_banner {
        print!("{}", render(&VersionInfo::current()));
    }
}

fn render(info: &VersionInfo) -> String {
    format!(
        "{}\n{}\n{}\n\n",
        style(ASCII_ART).cyan().bold(),
        TAGLINE,
        style(&info.version).dim()
    )
}
