//! CLI command showing configuration

use crate::config::{MoonlightPaths, Settings};

/// Render paths and settings as plain text
pub fn render_config(paths: &MoonlightPaths, settings: &Settings) -> String {
    let profile = &settings.default_profile;
    let export_dir = settings.export_dir();

    let mut output = String::new();
    output.push_str("Moonlight Ledger Configuration\n");
    output.push_str("==============================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!("Log file:         {}\n", paths.log_file().display()));
    output.push_str(&format!("Export directory: {}\n", export_dir.display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));
    output.push_str(&format!("  Date format:     {}\n", settings.date_format));
    output.push_str(&format!("  Log filter:      {}\n", settings.log_filter));
    output.push_str(&format!(
        "  Default profile: {} {}岁 {}\n",
        profile.gender, profile.age, profile.major
    ));
    output
}

/// Handle `moonlight config`
pub fn handle_config_command(paths: &MoonlightPaths, settings: &Settings) {
    print!("{}", render_config(paths, settings));
}
