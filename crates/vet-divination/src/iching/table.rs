//! The 64 hexagrams in King Wen order.
//!
//! Each entry is declared by its lower and upper trigram; the six-line
//! binary key is derived from them, so the table cannot hold two entries
//! for one key.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use super::trigram::Trigram;
use Trigram::{Earth, Fire, Heaven, Lake, Mountain, Thunder, Water, Wind};

/// Name and meaning of one hexagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexagramInfo {
    /// King Wen sequence number, 1 to 64.
    pub number: u8,
    /// Chinese name.
    pub chinese: &'static str,
    /// Pinyin romanization.
    pub pinyin: &'static str,
    /// English name.
    pub name: &'static str,
    /// Short interpretation.
    pub meaning: &'static str,
    /// Bottom three lines.
    pub lower: Trigram,
    /// Top three lines.
    pub upper: Trigram,
}

impl HexagramInfo {
    /// Six-character binary key, bottom line first.
    pub fn binary(&self) -> String {
        format!("{}{}", self.lower.binary(), self.upper.binary())
    }
}

impl fmt::Display for HexagramInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} - {} - {}",
            self.number, self.chinese, self.pinyin, self.name, self.meaning
        )
    }
}

const fn hex(
    number: u8,
    chinese: &'static str,
    pinyin: &'static str,
    name: &'static str,
    meaning: &'static str,
    lower: Trigram,
    upper: Trigram,
) -> HexagramInfo {
    HexagramInfo {
        number,
        chinese,
        pinyin,
        name,
        meaning,
        lower,
        upper,
    }
}

/// All 64 hexagrams, indexed by `number - 1`.
#[rustfmt::skip]
pub static HEXAGRAMS: [HexagramInfo; 64] = [
    hex(1, "乾", "Qián", "The Creative", "Strong action, leadership, and creative power.", Heaven, Heaven),
    hex(2, "坤", "Kūn", "The Receptive", "Yielding, nurturing, and devotion.", Earth, Earth),
    hex(3, "屯", "Zhūn", "Difficulty at the Beginning", "Initial challenges, growth through perseverance.", Thunder, Water),
    hex(4, "蒙", "Méng", "Youthful Folly", "Inexperience, learning through mistakes.", Water, Mountain),
    hex(5, "需", "Xū", "Waiting", "Patience, timing, and preparation.", Heaven, Water),
    hex(6, "訟", "Sòng", "Conflict", "Disagreement, seeking resolution.", Water, Heaven),
    hex(7, "師", "Shī", "The Army", "Discipline, organization, and collective effort.", Water, Earth),
    hex(8, "比", "Bǐ", "Holding Together", "Union, cooperation, and support.", Earth, Water),
    hex(9, "小畜", "Xiǎo Chù", "Small Taming", "Gentle influence, small steps toward progress.", Heaven, Wind),
    hex(10, "履", "Lǚ", "Treading", "Caution, careful progress, and respect.", Lake, Heaven),
    hex(11, "泰", "Tài", "Peace", "Harmony, balance, and prosperity.", Heaven, Earth),
    hex(12, "否", "Pǐ", "Standstill", "Stagnation, lack of progress, and disconnection.", Earth, Heaven),
    hex(13, "同人", "Tóng Rén", "Fellowship", "Community, shared goals, and cooperation.", Fire, Heaven),
    hex(14, "大有", "Dà Yǒu", "Great Possession", "Abundance, responsibility, and wealth.", Heaven, Fire),
    hex(15, "謙", "Qiān", "Modesty", "Humility, simplicity, and balance.", Mountain, Earth),
    hex(16, "豫", "Yù", "Enthusiasm", "Joy, inspiration, and collective action.", Earth, Thunder),
    hex(17, "隨", "Suí", "Following", "Adaptation, following the flow, and flexibility.", Thunder, Lake),
    hex(18, "蠱", "Gǔ", "Work on the Decayed", "Repair, renewal, and addressing neglect.", Wind, Mountain),
    hex(19, "臨", "Lín", "Approach", "Nearing, preparation, and anticipation.", Lake, Earth),
    hex(20, "觀", "Guān", "Contemplation", "Observation, reflection, and insight.", Earth, Wind),
    hex(21, "噬嗑", "Shì Kè", "Biting Through", "Determination, overcoming obstacles.", Thunder, Fire),
    hex(22, "賁", "Bì", "Grace", "Beauty, elegance, and refinement.", Fire, Mountain),
    hex(23, "剝", "Bō", "Splitting Apart", "Decay, collapse, and letting go.", Earth, Mountain),
    hex(24, "復", "Fù", "Return", "Renewal, turning point, and new beginnings.", Thunder, Earth),
    hex(25, "無妄", "Wú Wàng", "Innocence", "Spontaneity, purity, and natural action.", Thunder, Heaven),
    hex(26, "大畜", "Dà Chù", "Great Taming", "Restraint, potential, and controlled power.", Heaven, Mountain),
    hex(27, "頤", "Yí", "Nourishment", "Sustenance, self-care, and growth.", Thunder, Mountain),
    hex(28, "大過", "Dà Guò", "Preponderance of the Great", "Excess, critical point, and transition.", Wind, Lake),
    hex(29, "坎", "Kǎn", "The Abysmal", "Danger, depth, and navigating challenges.", Water, Water),
    hex(30, "離", "Lí", "The Clinging", "Brightness, clarity, and dependence.", Fire, Fire),
    hex(31, "咸", "Xián", "Influence", "Attraction, influence, and mutual response.", Mountain, Lake),
    hex(32, "恆", "Héng", "Duration", "Perseverance, commitment, and stability.", Wind, Thunder),
    hex(33, "遯", "Dùn", "Retreat", "Withdrawal, strategic retreat, and conservation.", Mountain, Heaven),
    hex(34, "大壯", "Dà Zhuàng", "Great Power", "Strength, assertiveness, and responsibility.", Heaven, Thunder),
    hex(35, "晉", "Jìn", "Progress", "Advancement, growth, and flourishing.", Earth, Fire),
    hex(36, "明夷", "Míng Yí", "Darkening of the Light", "Concealment, endurance, and inner light.", Fire, Earth),
    hex(37, "家人", "Jiā Rén", "The Family", "Roles, relationships, and harmony at home.", Fire, Wind),
    hex(38, "睽", "Kuí", "Opposition", "Contrast, tension, and misunderstanding.", Lake, Fire),
    hex(39, "蹇", "Jiǎn", "Obstruction", "Obstacles, difficulty, and turning back.", Mountain, Water),
    hex(40, "解", "Xiè", "Deliverance", "Release, forgiveness, and moving forward.", Water, Thunder),
    hex(41, "損", "Sǔn", "Decrease", "Reduction, simplification, and lessening.", Lake, Mountain),
    hex(42, "益", "Yì", "Increase", "Growth, expansion, and augmentation.", Thunder, Wind),
    hex(43, "夬", "Guài", "Breakthrough", "Resolution, determination, and decisive action.", Heaven, Lake),
    hex(44, "姤", "Gòu", "Coming to Meet", "Encounter, temptation, and caution.", Wind, Heaven),
    hex(45, "萃", "Cuì", "Gathering Together", "Assembly, unity, and collective power.", Earth, Lake),
    hex(46, "升", "Shēng", "Pushing Upward", "Effort, gradual progress, and ascent.", Wind, Earth),
    hex(47, "困", "Kùn", "Oppression", "Exhaustion, adversity, and resilience.", Water, Lake),
    hex(48, "井", "Jǐng", "The Well", "Resources, sustenance, and community support.", Wind, Water),
    hex(49, "革", "Gé", "Revolution", "Change, transformation, and renewal.", Fire, Lake),
    hex(50, "鼎", "Dǐng", "The Cauldron", "Nourishment, alchemy, and transformation.", Wind, Fire),
    hex(51, "震", "Zhèn", "The Arousing", "Shock, awakening, and sudden change.", Thunder, Thunder),
    hex(52, "艮", "Gèn", "Keeping Still", "Stillness, meditation, and inner peace.", Mountain, Mountain),
    hex(53, "漸", "Jiàn", "Development", "Gradual progress, patience, and growth.", Mountain, Wind),
    hex(54, "歸妹", "Guī Mèi", "The Marrying Maiden", "Subordination, secondary roles, and caution.", Lake, Thunder),
    hex(55, "豐", "Fēng", "Abundance", "Fullness, prosperity, and peak moments.", Fire, Thunder),
    hex(56, "旅", "Lǚ", "The Wanderer", "Travel, transience, and adaptability.", Mountain, Fire),
    hex(57, "巽", "Xùn", "The Gentle", "Penetration, persistence, and subtle influence.", Wind, Wind),
    hex(58, "兌", "Duì", "The Joyous", "Joy, pleasure, and open communication.", Lake, Lake),
    hex(59, "渙", "Huàn", "Dispersion", "Dissolution, spreading, and reuniting.", Water, Wind),
    hex(60, "節", "Jié", "Limitation", "Boundaries, discipline, and moderation.", Lake, Water),
    hex(61, "中孚", "Zhōng Fú", "Inner Truth", "Sincerity, insight, and inner knowing.", Lake, Wind),
    hex(62, "小過", "Xiǎo Guò", "Small Preponderance", "Attention to detail, caution, and small steps.", Mountain, Thunder),
    hex(63, "既濟", "Jì Jì", "After Completion", "Completion, balance, and vigilance.", Fire, Water),
    hex(64, "未濟", "Wèi Jì", "Before Completion", "Transition, potential, and preparation.", Water, Fire),
];

static BY_BINARY: LazyLock<HashMap<String, &'static HexagramInfo>> =
    LazyLock::new(|| HEXAGRAMS.iter().map(|h| (h.binary(), h)).collect());

/// Look up a hexagram by its six-character binary key.
pub fn lookup_hexagram(binary: &str) -> Option<&'static HexagramInfo> {
    BY_BINARY.get(binary).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_binaries() -> Vec<String> {
        (0..64u8)
            .map(|bits| {
                (0..6)
                    .map(|i| if (bits >> i) & 1 == 1 { '1' } else { '0' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn every_six_bit_string_has_a_hexagram() {
        for binary in all_binaries() {
            assert!(lookup_hexagram(&binary).is_some(), "no hexagram for {binary}");
        }
    }

    #[test]
    fn numbers_run_in_order_without_gaps() {
        for (i, h) in HEXAGRAMS.iter().enumerate() {
            assert_eq!(usize::from(h.number), i + 1);
        }
        assert_eq!(BY_BINARY.len(), 64);
    }

    #[test]
    fn reference_keys() {
        let expect = [
            ("111111", 1),
            ("000000", 2),
            ("100010", 3),
            ("100110", 17),
            ("011010", 48),
            ("010110", 47),
            ("001011", 53),
            ("110100", 54),
            ("011011", 57),
            ("010011", 59),
            ("110010", 60),
            ("101010", 63),
            ("010101", 64),
        ];
        for (binary, number) in expect {
            assert_eq!(lookup_hexagram(binary).unwrap().number, number, "{binary}");
        }
    }

    #[test]
    fn binary_is_lower_then_upper() {
        let zhun = &HEXAGRAMS[2];
        assert_eq!(zhun.lower, Trigram::Thunder);
        assert_eq!(zhun.upper, Trigram::Water);
        assert_eq!(zhun.binary(), "100010");
    }

    #[test]
    fn unknown_keys() {
        assert_eq!(lookup_hexagram("10101"), None);
        assert_eq!(lookup_hexagram("1010101"), None);
        assert_eq!(lookup_hexagram("abcdef"), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            HEXAGRAMS[62].to_string(),
            "63. 既濟 Jì Jì - After Completion - Completion, balance, and vigilance."
        );
    }
}
