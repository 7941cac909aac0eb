use ratatui::text::Line;

// Small line drawings for the built-in image references. Anything else is
// shown as a labelled frame.
const PICTURES: &[(&str, &[&str])] = &[
    ("apple", &["  ,(.  ", " (   ) ", "  `-'  "]),
    ("bear", &["(\\___/)", " (o o) ", " (=Y=) "]),
    ("bicycle", &["   __o ", " _`\\<,_", "(*)/ (*)"]),
    ("butterfly", &["\\\\ //", " (oo) ", "// \\\\"]),
    ("cat", &[" /\\_/\\ ", "( o.o )", " > ^ < "]),
    ("clock", &[" .---. ", "| 12  |", "|  \\  |", " '---' "]),
    ("dog", &["  __  ", "o'')}____//", " `_/      )", " (_(_/-(_/ "]),
    ("elephant", &["   __     ", " o'  )____", "  \\ /    )", "  | |-|| |"]),
    ("fish", &["  ><(((('>  "]),
    ("flower", &["  _(_)_ ", " (_)@(_)", "   (_)  ", "    |   "]),
    ("frog", &["  @..@  ", " (----) ", "( >__< )"]),
    ("house", &["   /\\   ", "  /  \\  ", " |[]  | ", " |__[]| "]),
    ("lemon", &["  .--.  ", " (    ) ", "  '--'  "]),
    ("moon", &["  _.._ ", " .' .-'`", "|  |    ", " '._'-._"]),
    ("pencil", &["==========>"]),
    ("rabbit", &[" (\\_/) ", " (o.o) ", " (> <) "]),
    ("rainbow", &["  .-~~~-.  ", " /  .-.  \\ ", "|  /   \\  |"]),
    ("snail", &["   @   @  ", "    \\_/   ", " __(@)__/ "]),
    ("tree", &["   ^   ", "  ^^^  ", " ^^^^^ ", "   |   "]),
    ("umbrella", &["  .--.  ", " /____\\ ", "    |   ", "    J   "]),
];

pub fn picture_lines(image: &str) -> Vec<Line<'static>> {
    match PICTURES.iter().find(|(name, _)| *name == image) {
        Some((_, art)) => art.iter().map(|line| Line::from(*line)).collect(),
        None => {
            let label = format!("[ {} ]", image);
            let border = format!("+{}+", "-".repeat(label.chars().count()));
            vec![
                Line::from(border.clone()),
                Line::from(format!("|{}|", label)),
                Line::from(border),
            ]
        }
    }
}
