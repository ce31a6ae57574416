//! Terminal styling helpers built on `colored`.

use colored::{ColoredString, Colorize};

pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn scene_style(&self) -> ColoredString;
    fn narration_style(&self) -> ColoredString;
    fn info_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn hp_full_style(&self) -> ColoredString;
    fn hp_empty_style(&self) -> ColoredString;
    fn hp_value_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bold().green()
    }
    fn scene_style(&self) -> ColoredString {
        self.yellow()
    }
    fn narration_style(&self) -> ColoredString {
        self.cyan()
    }
    fn info_style(&self) -> ColoredString {
        self.dimmed()
    }
    fn error_style(&self) -> ColoredString {
        self.bold().red()
    }
    fn hp_full_style(&self) -> ColoredString {
        self.bold().green()
    }
    fn hp_empty_style(&self) -> ColoredString {
        self.bold().red()
    }
    fn hp_value_style(&self) -> ColoredString {
        self.bold().bright_white()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold()
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn scene_style(&self) -> ColoredString {
        self.as_str().scene_style()
    }
    fn narration_style(&self) -> ColoredString {
        self.as_str().narration_style()
    }
    fn info_style(&self) -> ColoredString {
        self.as_str().info_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn hp_full_style(&self) -> ColoredString {
        self.as_str().hp_full_style()
    }
    fn hp_empty_style(&self) -> ColoredString {
        self.as_str().hp_empty_style()
    }
    fn hp_value_style(&self) -> ColoredString {
        self.as_str().hp_value_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}
