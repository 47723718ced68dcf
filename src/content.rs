//! Table-driven text synthesis for generated designs.
//!
//! Every generator maps a categorical key (mood, fabric, season, ...) to a
//! candidate list or single string and falls back to a fixed default when the
//! key is unknown, so no input can make these functions fail. Selection among
//! multiple candidates is uniform-random and independent across calls.

use rand::seq::SliceRandom;
use rand::Rng;

const FALLBACK_CAPTION: &str = "Serving looks and living dreams ✨";

const MOOD_CAPTIONS: &[(&str, &[&str])] = &[
    (
        "Romantic",
        &[
            "For when you want to be poetry in motion 💕",
            "Main character in a rom-com energy ✨",
            "Soft girl aesthetic but make it fashion 🌸",
            "Love letter to feminine elegance 💌",
            "Dreamy vibes for your inner hopeless romantic 🌹",
        ],
    ),
    (
        "Edgy",
        &[
            "For days when you're the villain in someone else's story 🖤",
            "Dark academia meets street style queen 💀",
            "When you need to serve looks and attitude 🔥",
            "Rebel with a cause (the cause is looking incredible) ⚡",
            "Main character energy meets gothic goddess 🌙",
        ],
    ),
    (
        "Minimalist",
        &[
            "Less is more, but make it iconic ✨",
            "Clean girl aesthetic with main character energy 🤍",
            "Effortlessly chic because you're that girl 💫",
            "Simple sophistication that speaks volumes 🕊️",
            "The art of doing more with less 🎨",
        ],
    ),
    (
        "Bohemian",
        &[
            "Free spirit with expensive taste 🌙",
            "Coachella vibes but make it everyday ✨",
            "Wanderlust meets wardrobe goals 🦋",
            "Desert flower meets city sophistication 🌵",
            "Nomadic chic for the modern goddess 🌸",
        ],
    ),
    (
        "Classic",
        &[
            "Timeless elegance never goes out of style 👑",
            "Old money aesthetic on any budget 💎",
            "Grace Kelly would approve ✨",
            "Investment piece energy ⭐",
            "Heritage luxury meets modern sensibility 🏛️",
        ],
    ),
    (
        "Sporty",
        &[
            "Athleisure but make it fashion week 💪",
            "Gym to brunch to world domination 🏃‍♀️",
            "Active lifestyle, iconic style ⚡",
            "Performance meets runway perfection 🎯",
            "Comfort meets couture 🌟",
        ],
    ),
    (
        "Futuristic",
        &[
            "Y2K princess meets space age queen 🚀",
            "Living in 3023 while everyone's in 2024 ✨",
            "Cyberpunk chic with a touch of magic 🌟",
            "Tomorrow's fashion icon today 🛸",
            "Neo-Tokyo meets Silicon Valley vibes 💫",
        ],
    ),
    (
        "Vintage",
        &[
            "Old soul with impeccable taste 📸",
            "Thrifted treasures and vintage dreams ✨",
            "Bringing back the golden age of fashion 💫",
            "Timeless pieces for the modern vintage lover 🕰️",
            "Retro revival with contemporary twist 🌺",
        ],
    ),
];

const FABRIC_TIPS: &[(&str, &str)] = &[
    ("Cotton", "Breathable, versatile, and perfect for everyday elegance"),
    ("Silk", "Luxurious drape creates an effortlessly sophisticated silhouette"),
    ("Wool", "Timeless warmth with structured elegance"),
    ("Linen", "Effortless summer sophistication with relaxed charm"),
    ("Denim", "Classic Americana meets modern style sensibilities"),
    ("Leather", "Edgy luxury that ages beautifully with wear"),
    ("Chiffon", "Ethereal movement perfect for romantic occasions"),
    ("Velvet", "Opulent texture that commands attention"),
];

const FALLBACK_FABRIC_TIP: &str = "Quality fabric choice enhances the overall aesthetic";

const MOOD_STYLING: &[(&str, &str)] = &[
    ("Romantic", "Pair with delicate jewelry and soft, flowing hair for maximum dreamy vibes"),
    ("Edgy", "Complete with statement boots and bold makeup for that perfect rebel aesthetic"),
    ("Minimalist", "Less is more - let the clean lines speak with minimal, quality accessories"),
    ("Bohemian", "Layer with textured accessories and embrace natural, tousled styling"),
    ("Classic", "Timeless accessories and polished styling create effortless sophistication"),
    ("Sporty", "Mix with sleek sneakers and modern accessories for elevated athleticism"),
    ("Futuristic", "Metallic accents and geometric accessories complete this forward-thinking look"),
    ("Vintage", "Period-appropriate accessories transport this look through time"),
];

const FALLBACK_MOOD_STYLING: &str = "Style according to your personal aesthetic";

const COLOR_MEANINGS: &[(&str, &str)] = &[
    ("red", "Power, passion, and confidence - this color commands attention and exudes strength"),
    ("blue", "Calm sophistication and trustworthiness - perfect for professional elegance"),
    ("green", "Growth, harmony, and natural beauty - connects with nature and renewal"),
    ("pink", "Feminine grace and playful sophistication - romantic yet empowering"),
    ("purple", "Luxury, creativity, and mystique - artistic expression meets regal elegance"),
    ("yellow", "Joy, optimism, and creative energy - brings sunshine to any outfit"),
    ("orange", "Warmth, enthusiasm, and boldness - perfect for making a statement"),
    ("black", "Timeless elegance and sophisticated power - the ultimate in chic versatility"),
    ("white", "Purity, minimalism, and fresh sophistication - clean and contemporary"),
    ("grey", "Modern neutrality and understated luxury - effortlessly sophisticated"),
    ("brown", "Earthy warmth and natural elegance - grounded sophistication"),
    ("navy", "Classic authority and refined elegance - professional yet approachable"),
];

const FALLBACK_COLOR_MEANING: &str =
    "A carefully chosen color that enhances your natural radiance";

const THEME_MEANINGS: &[(&str, &str)] = &[
    ("Monochromatic", "Creates visual harmony and sophisticated cohesion"),
    ("Complementary", "Bold contrast that creates dynamic visual interest"),
    ("Analogous", "Harmonious blend that feels naturally elegant"),
    ("Triadic", "Balanced vibrancy with sophisticated color play"),
    ("Neutral", "Timeless sophistication that never goes out of style"),
    ("Warm", "Inviting and energetic palette that radiates confidence"),
    ("Cool", "Calming and elegant tones that exude serene sophistication"),
];

const FALLBACK_THEME_MEANING: &str = "A thoughtfully curated palette";

const BODY_TYPE_SUGGESTIONS: &[(&str, &str)] = &[
    ("A-Line", "Flattering for all body types - creates beautiful silhouette balance"),
    ("Bodycon", "Celebrates curves - perfect for hourglass and athletic figures"),
    ("Flowing", "Universally flattering - creates graceful movement"),
    ("Structured", "Creates definition - ideal for straight and athletic builds"),
    ("Oversized", "Comfortable elegance - perfect for any body type seeking relaxed sophistication"),
];

const FALLBACK_BODY_TYPE: &str = "Flattering for all body types with thoughtful styling";

const OCCASION_SUGGESTIONS: &[(&str, &[&str])] = &[
    ("Cocktail", &["Evening parties", "Date nights", "Gallery openings", "Cocktail events"]),
    ("Casual", &["Weekend brunches", "Coffee dates", "Shopping trips", "Casual meetups"]),
    ("Business", &["Office meetings", "Professional events", "Networking", "Conferences"]),
    ("Formal", &["Galas", "Weddings", "Award ceremonies", "Formal dinners"]),
    ("Travel", &["Vacation", "City exploration", "Travel days", "Sightseeing"]),
    ("Party", &["Celebrations", "Night out", "Dancing", "Social events"]),
];

const FALLBACK_OCCASIONS: &[&str] = &["Various occasions", "Versatile wear"];

const IMAGE_RATIOS: &[(&str, &str)] = &[
    ("1:1", "Perfect square - ideal for social media posts"),
    ("4:5", "Portrait orientation - great for fashion photography"),
    ("3:4", "Classic portrait - perfect for lookbooks"),
    ("16:9", "Landscape format - ideal for presentations"),
];

/// Styling text keyed off season, fabric and mood.
#[derive(Debug, Clone)]
pub struct StylingTips {
    pub seasonal: String,
    pub fabric: String,
    pub mood: String,
}

#[derive(Debug, Clone)]
pub struct ColorPsychology {
    pub main_color: String,
    pub theme: String,
}

#[derive(Debug, Clone)]
pub struct BodyTypeOccasion {
    pub body_type: String,
    pub occasions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ImageSpec {
    pub ratio: &'static str,
    pub description: &'static str,
}

fn lookup<'a, V: Copy>(table: &'a [(&str, V)], key: &str) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Random caption for the given mood, with a fixed fallback for unknown moods.
pub fn quirky_caption(mood: &str) -> String {
    let candidates = lookup(MOOD_CAPTIONS, mood).unwrap_or(&[FALLBACK_CAPTION]);
    let mut rng = rand::thread_rng();
    (*candidates
        .choose(&mut rng)
        .unwrap_or(&FALLBACK_CAPTION))
    .to_string()
}

fn seasonal_candidates(season: &str, fabric: &str, color_theme: &str) -> Vec<String> {
    match season {
        "Spring" => vec![
            format!(
                "Perfect {} transition piece - layer with lightweight cardigans",
                season.to_lowercase()
            ),
            format!(
                "Embrace the renewal energy of spring with fresh {} tones",
                color_theme.to_lowercase()
            ),
            "Ideal for those unpredictable spring days - versatile and adaptable".to_string(),
        ],
        "Summer" => vec![
            format!("{fabric} is your best friend in summer heat - breathable yet stylish"),
            "Perfect for vacation wardrobes and endless summer adventures".to_string(),
            "Sun-kissed elegance meets practical summer styling".to_string(),
        ],
        "Fall" => vec![
            "Autumn elegance at its finest - perfect for cozy coffee dates".to_string(),
            "Layer with textured pieces for that perfect fall aesthetic".to_string(),
            format!(
                "Embrace the golden hour vibes with warm {} hues",
                color_theme.to_lowercase()
            ),
        ],
        "Winter" => vec![
            "Winter sophistication meets comfort - layer with luxe outerwear".to_string(),
            "Perfect for holiday parties and intimate gatherings".to_string(),
            "Cozy meets chic in this winter-ready ensemble".to_string(),
        ],
        other => vec![format!("Perfect for {} styling", other.to_lowercase())],
    }
}

/// Seasonal, fabric and mood styling tips. The seasonal tip is picked at
/// random from the season's candidate list; fabric and mood tips are
/// single-valued lookups with fallbacks.
pub fn styling_tips(fabric: &str, season: &str, mood: &str, color_theme: &str) -> StylingTips {
    let candidates = seasonal_candidates(season, fabric, color_theme);
    let mut rng = rand::thread_rng();
    let seasonal = candidates
        .choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| format!("Perfect for {} styling", season.to_lowercase()));

    StylingTips {
        seasonal,
        fabric: lookup(FABRIC_TIPS, fabric)
            .unwrap_or(FALLBACK_FABRIC_TIP)
            .to_string(),
        mood: lookup(MOOD_STYLING, mood)
            .unwrap_or(FALLBACK_MOOD_STYLING)
            .to_string(),
    }
}

/// Psychology notes for the main color (case-insensitive lookup) and the
/// color theme.
pub fn color_psychology(color_theme: &str, main_color: &str) -> ColorPsychology {
    let main = main_color.to_lowercase();
    ColorPsychology {
        main_color: lookup(COLOR_MEANINGS, &main)
            .unwrap_or(FALLBACK_COLOR_MEANING)
            .to_string(),
        theme: lookup(THEME_MEANINGS, color_theme)
            .unwrap_or(FALLBACK_THEME_MEANING)
            .to_string(),
    }
}

/// Which occasion bucket an outfit falls into. Ordered rule cascade over
/// (style, mood, fabric); first matching rule wins, default Casual.
fn style_category(style: &str, fabric: &str, mood: &str) -> &'static str {
    if style.contains("Formal") || mood == "Classic" {
        "Formal"
    } else if style.contains("Business") || fabric == "Wool" {
        "Business"
    } else if mood == "Edgy" || style.contains("Night") {
        "Party"
    } else if mood == "Romantic" || style.contains("Date") {
        "Cocktail"
    } else {
        "Casual"
    }
}

/// Body-type note keyed on the style silhouette plus at most three suggested
/// occasions for the derived style category.
pub fn body_type_and_occasion(style: &str, fabric: &str, mood: &str) -> BodyTypeOccasion {
    let category = style_category(style, fabric, mood);
    let occasions = lookup(OCCASION_SUGGESTIONS, category).unwrap_or(FALLBACK_OCCASIONS);

    BodyTypeOccasion {
        body_type: lookup(BODY_TYPE_SUGGESTIONS, style)
            .unwrap_or(FALLBACK_BODY_TYPE)
            .to_string(),
        occasions: occasions
            .iter()
            .take(3)
            .map(|s| (*s).to_string())
            .collect(),
    }
}

/// Random aspect-ratio recommendation for the rendered image.
pub fn image_spec() -> ImageSpec {
    let mut rng = rand::thread_rng();
    let idx = rng.gen_range(0..IMAGE_RATIOS.len());
    let (ratio, description) = IMAGE_RATIOS[idx];
    ImageSpec { ratio, description }
}

/// Generic one-line styling tip applied client-side when a batch resolves.
pub fn generic_styling_tip(style: &str, fabric: &str, season: &str) -> String {
    let tips = [
        format!(
            "Perfect for {} - layer with a denim jacket for casual vibes",
            season.to_lowercase()
        ),
        format!(
            "The {} fabric makes this perfect for both day and night looks",
            fabric.to_lowercase()
        ),
        format!(
            "Pair with minimalist jewelry to let the {} speak for itself",
            style.to_lowercase()
        ),
        "Add a belt to accentuate your silhouette and elevate the look".to_string(),
        "Mix textures by adding a structured blazer for office-to-dinner versatility".to_string(),
        "Complete the look with statement accessories in complementary colors".to_string(),
        "Layer with a turtleneck underneath for a chic transitional season look".to_string(),
        "The perfect canvas for experimenting with bold makeup looks".to_string(),
    ];
    let mut rng = rand::thread_rng();
    tips.choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| tips[0].clone())
}
