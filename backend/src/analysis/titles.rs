use rand::seq::SliceRandom;
use rand::Rng;

/// Filler for the keyword slot when a channel yields no keywords.
pub const FALLBACK_KEYWORD: &str = "your niche";

pub const TITLE_TEMPLATE_COUNT: usize = 8;

fn render(template: usize, keyword: &str, year: i32) -> String {
    match template {
        0 => format!("🚀 Mastering {keyword} - The Ultimate Guide!"),
        1 => format!("🔥 Why {keyword} is Changing the Game in {year}!"),
        2 => format!("📢 Stop Doing {keyword} Wrong! Do THIS Instead"),
        3 => format!("💡 10 Surprising Facts About {keyword} You Didn't Know!"),
        4 => format!("💰 How to Earn More Using {keyword} - Expert Tips"),
        5 => format!("⏳ The Future of {keyword} - What You Need to Know!"),
        6 => format!("🛑 Biggest Mistakes to Avoid in {keyword} RIGHT NOW"),
        _ => format!("📈 Boost Your Channel With These {keyword} Growth Hacks!"),
    }
}

/// Every title the templates can produce for `keyword`.
pub fn candidate_titles(keyword: Option<&str>, year: i32) -> Vec<String> {
    let keyword = keyword.unwrap_or(FALLBACK_KEYWORD);
    (0..TITLE_TEMPLATE_COUNT)
        .map(|template| render(template, keyword, year))
        .collect()
}

/// Picks one template uniformly at random.
pub fn suggest_title<R: Rng + ?Sized>(keyword: Option<&str>, year: i32, rng: &mut R) -> String {
    candidate_titles(keyword, year)
        .choose(rng)
        .cloned()
        .unwrap_or_default()
}
