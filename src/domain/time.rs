/// Format a second count as "Xh Ym", "Xh Ym Zs" or "Ym Zs"
pub fn format_seconds(total_seconds: u32, always_show_seconds: bool) -> String {
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        if always_show_seconds {
            format!("{}h {}m {}s", hours, mins, secs)
        } else {
            format!("{}h {}m", hours, mins)
        }
    } else {
        format!("{}m {}s", mins, secs)
    }
}

/// Format a second count as a countdown clock: "mm:ss" or "h:mm:ss"
pub fn format_clock(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}
