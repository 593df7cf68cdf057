//! Static exercise catalog.
//!
//! The catalog is a read-only reference dataset. Sessions store only exercise
//! IDs and look the records up at render time, so a reference to an unknown ID
//! is not an error.

use std::collections::BTreeMap;

use derive_more::{AsRef, Display, Into};

/// Key of an [`Exercise`] in the catalog.
///
/// IDs are opaque strings. They are kept on `ExerciseRef`s even when the
/// catalog has no matching record.
#[derive(AsRef, Debug, Display, Clone, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub target_muscles: &'static [&'static str],
    pub equipment: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[must_use]
pub fn lookup(id: &ExerciseID) -> Option<&'static Exercise> {
    EXERCISES.get(id.as_str())
}

pub fn exercises() -> impl Iterator<Item = &'static Exercise> {
    EXERCISES.values()
}

static EXERCISES: std::sync::LazyLock<BTreeMap<&'static str, Exercise>> =
    std::sync::LazyLock::new(|| {
        ENTRIES
            .iter()
            .map(|e| (e.id, e.clone()))
            .collect::<BTreeMap<_, _>>()
    });

const ENTRIES: [Exercise; 12] = [
    Exercise {
        id: "1",
        name: "پرس سینه هالتر",
        target_muscles: &["سینه", "سرشانه", "پشت بازو"],
        equipment: "هالتر",
        description: "روی نیمکت تخت دراز بکشید و هالتر را تا نزدیکی سینه پایین بیاورید.",
        image: "exercises/barbell-bench-press.webp",
    },
    Exercise {
        id: "2",
        name: "اسکوات هالتر",
        target_muscles: &["چهارسر ران", "سرینی", "همسترینگ"],
        equipment: "هالتر",
        description: "با هالتر روی شانه‌ها تا موازی شدن ران با زمین پایین بروید.",
        image: "exercises/barbell-squat.webp",
    },
    Exercise {
        id: "3",
        name: "ددلیفت",
        target_muscles: &["فیله کمر", "سرینی", "همسترینگ"],
        equipment: "هالتر",
        description: "هالتر را با کمر صاف از زمین بلند کنید.",
        image: "exercises/deadlift.webp",
    },
    Exercise {
        id: "4",
        name: "بارفیکس",
        target_muscles: &["زیربغل", "جلو بازو"],
        equipment: "بدون وسیله",
        description: "خود را تا عبور چانه از میله بالا بکشید.",
        image: "exercises/pull-up.webp",
    },
    Exercise {
        id: "5",
        name: "پرس سرشانه دمبل",
        target_muscles: &["سرشانه", "پشت بازو"],
        equipment: "دمبل",
        description: "دمبل‌ها را از کنار گوش تا بالای سر پرس کنید.",
        image: "exercises/dumbbell-shoulder-press.webp",
    },
    Exercise {
        id: "6",
        name: "زیربغل قایقی",
        target_muscles: &["زیربغل", "پشت", "جلو بازو"],
        equipment: "دستگاه",
        description: "دسته را تا نزدیکی شکم بکشید و کتف‌ها را جمع کنید.",
        image: "exercises/seated-cable-row.webp",
    },
    Exercise {
        id: "7",
        name: "جلو بازو دمبل",
        target_muscles: &["جلو بازو"],
        equipment: "دمبل",
        description: "دمبل را بدون حرکت دادن آرنج به سمت شانه بالا بیاورید.",
        image: "exercises/dumbbell-curl.webp",
    },
    Exercise {
        id: "8",
        name: "پشت بازو سیم‌کش",
        target_muscles: &["پشت بازو"],
        equipment: "سیم‌کش",
        description: "دسته سیم‌کش را با آرنج ثابت به سمت پایین فشار دهید.",
        image: "exercises/triceps-pushdown.webp",
    },
    Exercise {
        id: "9",
        name: "لانگز دمبل",
        target_muscles: &["چهارسر ران", "سرینی"],
        equipment: "دمبل",
        description: "با هر پا یک قدم بلند بردارید و پایین بروید.",
        image: "exercises/dumbbell-lunge.webp",
    },
    Exercise {
        id: "10",
        name: "پلانک",
        target_muscles: &["شکم", "فیله کمر"],
        equipment: "بدون وسیله",
        description: "بدن را روی ساعدها صاف نگه دارید.",
        image: "exercises/plank.webp",
    },
    Exercise {
        id: "11",
        name: "قفسه سینه دمبل",
        target_muscles: &["سینه", "سرشانه"],
        equipment: "دمبل",
        description: "دمبل‌ها را با آرنج کمی خم از دو طرف باز و بسته کنید.",
        image: "exercises/dumbbell-fly.webp",
    },
    Exercise {
        id: "12",
        name: "ساق پا ایستاده",
        target_muscles: &["ساق پا"],
        equipment: "دستگاه",
        description: "روی پنجه پا بلند شوید و به آرامی پایین بیایید.",
        image: "exercises/standing-calf-raise.webp",
    },
];
