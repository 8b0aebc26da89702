use berth_core::Settings;

/// Print current settings and where they live.
pub fn show() -> anyhow::Result<()> {
    let path = Settings::default_path();
    let settings = Settings::load(&path);
    println!("settings file: {}", path.display());
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

/// Set one settings key. The watch daemon picks the change up within one
/// polling cycle.
pub fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let path = Settings::default_path();
    let mut settings = Settings::load(&path);
    match key {
        "live_monitor" => settings.live_monitor = value.parse()?,
        "auto_attach" => settings.auto_attach = value.parse()?,
        "default_port" => settings.default_port = value.parse()?,
        "attach_command" => settings.attach_command = value.to_string(),
        other => anyhow::bail!("unknown settings key: {other}"),
    }
    settings.save(&path)?;
    println!("{key} = {value}");
    Ok(())
}
