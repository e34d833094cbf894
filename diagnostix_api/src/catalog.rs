//! The disease-detection models advertised by the front-end. One table,
//! read by the header menu, the landing page and the dashboard.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Activity,
    ArrowRight,
    Brain,
    Calendar,
    Heart,
    LogOut,
    Shield,
    Stethoscope,
    TrendingUp,
    User,
    Wind,
}

/// Accent colour of a model's icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accent {
    Red,
    Purple,
    Pink,
    Blue,
    Green,
}

impl Accent {
    pub fn hex(&self) -> &'static str {
        match self {
            Accent::Red => "#ef4444",
            Accent::Purple => "#a855f7",
            Accent::Pink => "#ec4899",
            Accent::Blue => "#3b82f6",
            Accent::Green => "#22c55e",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiseaseModel {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: Icon,
    pub path: &'static str,
    pub accent: Accent,
    /// Short line for the landing page card.
    pub tagline: &'static str,
    /// Longer line for the dashboard card.
    pub description: &'static str,
}

impl DiseaseModel {
    /// Blurb under the entry in the header's model menu.
    pub fn menu_blurb(&self) -> String {
        format!("AI-powered detection for {}", self.name.to_lowercase())
    }
}

pub const DISEASE_MODELS: [DiseaseModel; 5] = [
    DiseaseModel {
        slug: "heart-disease",
        name: "Heart Disease",
        icon: Icon::Heart,
        path: "/heart-disease",
        accent: Accent::Red,
        tagline: "AI-powered cardiovascular risk assessment",
        description: "Analyze cardiovascular health risks using AI algorithms",
    },
    DiseaseModel {
        slug: "alzheimer",
        name: "Alzheimer",
        icon: Icon::Brain,
        path: "/alzheimer",
        accent: Accent::Purple,
        tagline: "Early cognitive decline detection",
        description: "Early detection of cognitive decline patterns",
    },
    DiseaseModel {
        slug: "brain-tumor",
        name: "Brain Tumor",
        icon: Icon::Brain,
        path: "/brain-tumor",
        accent: Accent::Pink,
        tagline: "Medical imaging analysis",
        description: "Medical imaging analysis for tumor detection",
    },
    DiseaseModel {
        slug: "diabetes",
        name: "Diabetes",
        icon: Icon::Activity,
        path: "/diabetes",
        accent: Accent::Blue,
        tagline: "Blood sugar risk evaluation",
        description: "Blood sugar level analysis and risk assessment",
    },
    DiseaseModel {
        slug: "pneumonia",
        name: "Pneumonia",
        icon: Icon::Wind,
        path: "/pneumonia",
        accent: Accent::Green,
        tagline: "Chest X-ray analysis",
        description: "Chest X-ray analysis for respiratory conditions",
    },
];

pub fn find_by_path(path: &str) -> Option<&'static DiseaseModel> {
    DISEASE_MODELS.iter().find(|model| model.path == path)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_and_paths_are_unique() {
        let names: HashSet<_> = DISEASE_MODELS.iter().map(|m| m.name).collect();
        let paths: HashSet<_> = DISEASE_MODELS.iter().map(|m| m.path).collect();
        assert_eq!(names.len(), DISEASE_MODELS.len());
        assert_eq!(paths.len(), DISEASE_MODELS.len());
    }

    #[test]
    fn path_is_slash_slug() {
        for model in DISEASE_MODELS.iter() {
            assert_eq!(model.path, format!("/{}", model.slug));
            assert_eq!(find_by_path(model.path), Some(model));
        }
        assert_eq!(find_by_path("/dashboard"), None);
    }

    #[test]
    fn menu_blurb_lowercases_name() {
        assert_eq!(
            DISEASE_MODELS[0].menu_blurb(),
            "AI-powered detection for heart disease"
        );
    }

    #[test]
    fn name_to_path_mapping() {
        let expected = [
            ("Heart Disease", "/heart-disease"),
            ("Alzheimer", "/alzheimer"),
            ("Brain Tumor", "/brain-tumor"),
            ("Diabetes", "/diabetes"),
            ("Pneumonia", "/pneumonia"),
        ];
        let actual: Vec<_> = DISEASE_MODELS.iter().map(|m| (m.name, m.path)).collect();
        assert_eq!(actual, expected);
    }
}
