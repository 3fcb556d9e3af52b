use crate::models::UserKind;

/// The age band a module is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    PreStudent,
    Student,
}

impl AgeGroup {
    pub fn band_label(&self) -> &'static str {
        match self {
            AgeGroup::PreStudent => "Ages 3-5",
            AgeGroup::Student => "Ages 6-8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleId {
    Alphabet,
    Counting,
    Math,
    ImageRecognition,
    SentenceFormation,
}

impl ModuleId {
    /// Progress-map key. The math module writes finer-grained keys of the
    /// form `math-<operation>`, see `screens::math`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Alphabet => "alphabet",
            ModuleId::Counting => "counting",
            ModuleId::Math => "math",
            ModuleId::ImageRecognition => "image-recognition",
            ModuleId::SentenceFormation => "sentence-formation",
        }
    }
}

/// Static catalog entry. Not user-editable.
#[derive(Debug, Clone, Copy)]
pub struct ModuleDescriptor {
    pub id: ModuleId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub age_group: AgeGroup,
}

pub const CATALOG: [ModuleDescriptor; 5] = [
    ModuleDescriptor {
        id: ModuleId::Alphabet,
        title: "Learn the Alphabet",
        description: "Explore letters A to Z with fun pictures and sounds",
        icon: "🔤",
        age_group: AgeGroup::PreStudent,
    },
    ModuleDescriptor {
        id: ModuleId::Counting,
        title: "Counting Numbers",
        description: "Learn to count from 1 to 20 with interactive exercises",
        icon: "🔢",
        age_group: AgeGroup::PreStudent,
    },
    ModuleDescriptor {
        id: ModuleId::Math,
        title: "Math Learning",
        description: "Learn addition, subtraction and multiplication",
        icon: "🧮",
        age_group: AgeGroup::Student,
    },
    ModuleDescriptor {
        id: ModuleId::ImageRecognition,
        title: "Image Recognition",
        description: "Test your knowledge by identifying objects and animals",
        icon: "🖼️",
        age_group: AgeGroup::Student,
    },
    ModuleDescriptor {
        id: ModuleId::SentenceFormation,
        title: "Sentence Formation",
        description: "Learn to create simple sentences with words",
        icon: "📝",
        age_group: AgeGroup::Student,
    },
];

/// Availability is a pure predicate on the profile kind and the module's
/// age group. Pre-student content is always open to students; student
/// content is never open to pre-students.
pub fn is_available(kind: UserKind, age_group: AgeGroup) -> bool {
    matches!(
        (kind, age_group),
        (UserKind::PreStudent, AgeGroup::PreStudent)
            | (UserKind::Student, AgeGroup::Student)
            | (UserKind::Student, AgeGroup::PreStudent)
    )
}

/// The catalog entries the given profile kind may enter.
pub fn available_modules(kind: UserKind) -> Vec<&'static ModuleDescriptor> {
    CATALOG
        .iter()
        .filter(|module| is_available(kind, module.age_group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_student_gets_only_pre_student_modules() {
        let modules = available_modules(UserKind::PreStudent);
        assert_eq!(modules.len(), 2);
        assert!(modules
            .iter()
            .all(|module| module.age_group == AgeGroup::PreStudent));
    }

    #[test]
    fn test_student_gets_whole_catalog() {
        let modules = available_modules(UserKind::Student);
        assert_eq!(modules.len(), CATALOG.len());
    }

    #[test]
    fn test_availability_is_monotonic() {
        // Anything open to a pre-student is open to a student; the
        // reverse does not hold for the student-band entries.
        for module in &CATALOG {
            if is_available(UserKind::PreStudent, module.age_group) {
                assert!(is_available(UserKind::Student, module.age_group));
            }
        }
        assert!(!is_available(UserKind::PreStudent, AgeGroup::Student));
    }

    #[test]
    fn test_age_four_profile_sees_pre_student_set() {
        // Age 4 maps to pre-student: alphabet and counting only.
        let kind = crate::models::UserKind::from_age(4);
        let ids: Vec<_> = available_modules(kind).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![ModuleId::Alphabet, ModuleId::Counting]);
    }

    #[test]
    fn test_age_seven_profile_unlocks_student_set() {
        // Age 7 maps to student: every student-band module is unlocked.
        let kind = crate::models::UserKind::from_age(7);
        for module in CATALOG
            .iter()
            .filter(|module| module.age_group == AgeGroup::Student)
        {
            assert!(is_available(kind, module.age_group));
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id.as_str(), b.id.as_str());
            }
        }
    }
}
