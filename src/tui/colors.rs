use ratatui::style::Color;

pub const ACCENT: Color = Color::Cyan;
pub const BAR_BG: Color = Color::Rgb(0, 95, 135);
pub const SELECTED_BG: Color = Color::Rgb(60, 60, 80);
pub const MUTED: Color = Color::DarkGray;

pub fn color_for_department(department: &str) -> Color {
    match department.to_lowercase().as_str() {
        "engineering" => Color::LightBlue,
        "hr" | "human resources" => Color::Magenta,
        "finance" => Color::Green,
        "marketing" => Color::Yellow,
        "operations" => Color::LightRed,
        "-" => MUTED,
        _ => Color::White,
    }
}
