/// Number of placeholder cards shown while loading or searching.
pub const SKELETON_COUNT: usize = 6;

/// A grey placeholder card.
pub fn render_skeleton() -> String {
    ["( )  ▒▒▒▒▒▒▒▒▒▒", "     ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒", "     ▒▒▒▒▒  ▒▒▒▒▒"].join("\n")
}

pub(crate) fn render_skeletons() -> String {
    vec![render_skeleton(); SKELETON_COUNT].join("\n\n")
}
