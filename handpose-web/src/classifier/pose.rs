//! Discrete hand poses

/// Pose labels (order matches `Pose::index`)
pub const POSE_NAMES: [&str; 11] = [
    "fist", "paper", "one", "two", "three", "four", "thumb", "right", "peace", "spiderman",
    "unknown",
];

/// Hand pose enum for type-safe handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Pose {
    #[default]
    Fist,
    Paper,
    One,
    Two,
    Three,
    Four,
    Thumb,
    Right,
    Peace,
    Spiderman,
    /// Only produced by the strict unmatched policy
    Unknown,
}

impl Pose {
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Pose::Fist,
            1 => Pose::Paper,
            2 => Pose::One,
            3 => Pose::Two,
            4 => Pose::Three,
            5 => Pose::Four,
            6 => Pose::Thumb,
            7 => Pose::Right,
            8 => Pose::Peace,
            9 => Pose::Spiderman,
            _ => Pose::Unknown,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Pose::Fist => 0,
            Pose::Paper => 1,
            Pose::One => 2,
            Pose::Two => 3,
            Pose::Three => 4,
            Pose::Four => 5,
            Pose::Thumb => 6,
            Pose::Right => 7,
            Pose::Peace => 8,
            Pose::Spiderman => 9,
            Pose::Unknown => 10,
        }
    }

    pub fn name(&self) -> &'static str {
        POSE_NAMES[self.index()]
    }
}
