use crate::motion::{ROADMAP_BADGE, ROADMAP_CHIPS, ROADMAP_CONNECTOR, ROADMAP_STEPS};

use super::CloudSecurityStep;

/// Gradient and border classes, cycled by step position.
pub const STEP_PALETTES: [StepPalette; 4] = [
    StepPalette {
        gradient: "from-blue-500 to-cyan-500",
        border: "border-blue-400",
    },
    StepPalette {
        gradient: "from-green-500 to-emerald-500",
        border: "border-green-400",
    },
    StepPalette {
        gradient: "from-purple-500 to-violet-500",
        border: "border-purple-400",
    },
    StepPalette {
        gradient: "from-orange-500 to-red-500",
        border: "border-orange-400",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPalette {
    pub gradient: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBadge {
    Completed,
    InProgress(Option<u8>),
}

impl StepBadge {
    pub fn label(self) -> String {
        match self {
            Self::Completed => "✅ Completed".to_string(),
            Self::InProgress(None) => "🎯 In Progress".to_string(),
            Self::InProgress(Some(p)) => format!("🎯 In Progress · {p}%"),
        }
    }
}

/// One rendered row of the roadmap modal.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapEntry<'a> {
    pub number: usize,
    pub step: &'a CloudSecurityStep,
    pub icon: &'static str,
    pub palette: StepPalette,
    pub badge: StepBadge,
    pub delay: f32,
    pub chip_delays: Vec<f32>,
    pub badge_delay: f32,
    /// Delay of the line to the next step; `None` on the last step.
    pub connector_delay: Option<f32>,
}

pub fn step_icon(id: &str) -> &'static str {
    match id {
        "aws-fundamentals" => "☁️",
        "security-fundamentals" => "🛡️",
        "devsecops" => "⚙️",
        "monitoring-compliance" => "📊",
        _ => "☁️",
    }
}

/// Entries in input order. Completion only changes the badge.
pub fn roadmap_entries(steps: &[CloudSecurityStep]) -> Vec<RoadmapEntry<'_>> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let chips = ROADMAP_CHIPS.after(ROADMAP_STEPS, i);
            RoadmapEntry {
                number: i + 1,
                step,
                icon: step_icon(&step.id),
                palette: STEP_PALETTES[i % STEP_PALETTES.len()],
                badge: if step.completed {
                    StepBadge::Completed
                } else {
                    StepBadge::InProgress(step.progress)
                },
                delay: ROADMAP_STEPS.delay(i),
                chip_delays: (0..step.skills.len()).map(|c| chips.delay(c)).collect(),
                badge_delay: ROADMAP_BADGE.delay(i),
                connector_delay: (i + 1 < steps.len()).then(|| ROADMAP_CONNECTOR.delay(i)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::inline_resume;

    #[test]
    fn test_entries_follow_input_order_regardless_of_completion() {
        let mut steps = inline_resume().cloud_roadmap;
        steps[2].completed = true;
        steps[0].progress = Some(40);
        let entries = roadmap_entries(&steps);
        assert_eq!(entries.len(), steps.len());
        let ids = entries.iter().map(|e| e.step.id.as_str()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "aws-fundamentals",
                "security-fundamentals",
                "devsecops",
                "monitoring-compliance"
            ]
        );
        assert_eq!(
            entries.iter().map(|e| e.number).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(entries[2].badge, StepBadge::Completed);
        assert_eq!(entries[0].badge, StepBadge::InProgress(Some(40)));
        assert_eq!(entries[1].badge.label(), "🎯 In Progress");
        assert_eq!(entries[0].badge.label(), "🎯 In Progress · 40%");
    }

    #[test]
    fn test_icons_palettes_and_connectors() {
        let mut steps = inline_resume().cloud_roadmap;
        steps.push(CloudSecurityStep {
            id: "zero-trust".into(),
            title: "Zero Trust".into(),
            description: String::new(),
            skills: vec![],
            completed: false,
            progress: None,
        });
        let entries = roadmap_entries(&steps);
        assert_eq!(entries[1].icon, "🛡️");
        assert_eq!(entries[4].icon, "☁️");
        assert_eq!(entries[4].palette, STEP_PALETTES[0]);
        assert!(entries[..4].iter().all(|e| e.connector_delay.is_some()));
        assert_eq!(entries[4].connector_delay, None);
        assert!(entries[4].chip_delays.is_empty());
        assert!(entries.windows(2).all(|w| w[0].delay < w[1].delay));
        assert!(roadmap_entries(&[]).is_empty());
    }
}
