//! English strings.

pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        "app.search" => "Search patients...",
        "app.showing" => "Showing {{count}} of {{total}} patients",
        "app.for" => "for \"{{term}}\"",
        "app.noResults" => "No results found",
        "app.tryOtherSearch" => "Try a different search term",
        "app.cancel" => "Cancel",
        "app.loading" => "Saving...",
        "app.language" => "Language",

        "patient.title" => "Patient Management",
        "patient.addNew" => "Add Patient",
        "patient.addFirst" => "Add first patient",
        "patient.editPatient" => "Edit Patient",
        "patient.deletePatient" => "Delete Patient",
        "patient.noPatients" => "No patients yet",
        "patient.startAdding" => "Start by adding your first patient",
        "patient.name" => "Name",
        "patient.namePlaceholder" => "Full name",
        "patient.avatar" => "Avatar URL",
        "patient.avatarPlaceholder" => "https://example.com/avatar.png",
        "patient.description" => "Description",
        "patient.descriptionPlaceholder" => "Clinical notes, history, observations...",
        "patient.website" => "Website",
        "patient.websitePlaceholder" => "https://example.com",
        "patient.patientId" => "Patient ID",
        "patient.createdAt" => "Created",
        "patient.showMore" => "Show more",
        "patient.showLess" => "Show less",

        "validation.nameRequired" => "Name is required",
        "validation.nameMinLength" => "Name must be at least 2 characters",
        "validation.nameMaxLength" => "Name cannot exceed 50 characters",
        "validation.nameInvalid" => "Name can only contain letters and spaces",
        "validation.avatarRequired" => "Avatar URL is required",
        "validation.avatarInvalid" => "Avatar must be a valid URL",
        "validation.descriptionRequired" => "Description is required",
        "validation.descriptionMinLength" => "Description must be at least 5 characters",
        "validation.websiteRequired" => "Website is required",
        "validation.websiteInvalid" => "Website must be a valid URL",

        "notifications.patientCreated" => "Patient created successfully",
        "notifications.patientUpdated" => "Patient updated successfully",
        "notifications.patientDeleted" => "Patient deleted successfully",
        "notifications.errorLoading" => "Error loading patients",
        "notifications.errorCreating" => "Error creating patient",
        "notifications.errorUpdating" => "Error updating patient",
        "notifications.errorDeleting" => "Error deleting patient",

        "confirmDialog.deleteTitle" => "Delete patient",
        "confirmDialog.deleteMessage" => {
            "Are you sure you want to delete {{name}}? This action cannot be undone."
        }
        "confirmDialog.deleteConfirm" => "Delete",
        "confirmDialog.deleteCancel" => "Cancel",
        _ => return None,
    };
    Some(text)
}
