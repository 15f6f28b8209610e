//! One patient in the list.

use super::format::{format_date, truncate_text, DESCRIPTION_PREVIEW_CHARS};
use crate::avatar::AvatarImage;
use crate::i18n::Translator;
use crate::model::Patient;

/// A rendered card with its own view state: the avatar fallback and the
/// expanded/collapsed toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientCard {
    patient: Patient,
    avatar: AvatarImage,
    expanded: bool,
}

impl PatientCard {
    pub fn new(patient: Patient) -> Self {
        let avatar = AvatarImage::new(&patient.avatar, &patient.name);
        Self {
            patient,
            avatar,
            expanded: false,
        }
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn avatar(&self) -> &AvatarImage {
        &self.avatar
    }

    /// Forwards an image load failure to the avatar. See [`AvatarImage::on_load_error`].
    pub fn on_avatar_error(&mut self) -> bool {
        self.avatar.on_load_error()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn render(&self, t: &dyn Translator) -> String {
        let patient = &self.patient;
        let date = format_date(patient, t.language());

        let mut lines = vec![
            format!("[{}]", self.avatar.src()),
            format!(
                "{}  ({} | {})",
                patient.name,
                t.t("patient.editPatient", &[]),
                t.t("patient.deletePatient", &[])
            ),
            truncate_text(&patient.description, DESCRIPTION_PREVIEW_CHARS),
        ];
        if !patient.website.is_empty() {
            lines.push(format!("-> {}", t.t("patient.website", &[])));
        }

        let toggle = if self.expanded {
            "patient.showLess"
        } else {
            "patient.showMore"
        };
        lines.push(format!("{date}  [{}]", t.t(toggle, &[])));

        if self.expanded {
            lines.push(format!("{}: {}", t.t("patient.description", &[]), patient.description));
            lines.push(format!("{}: {}", t.t("patient.patientId", &[]), patient.id));
            lines.push(format!("{}: {date}", t.t("patient.createdAt", &[])));
            if !patient.website.is_empty() {
                lines.push(format!("{}: {}", t.t("patient.website", &[]), patient.website));
            }
        }

        lines.join("\n")
    }
}
