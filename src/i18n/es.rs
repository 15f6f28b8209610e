//! Spanish strings.

pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        "app.search" => "Buscar pacientes...",
        "app.showing" => "Mostrando {{count}} de {{total}} pacientes",
        "app.for" => "para \"{{term}}\"",
        "app.noResults" => "No se encontraron resultados",
        "app.tryOtherSearch" => "Intenta con otro término de búsqueda",
        "app.cancel" => "Cancelar",
        "app.loading" => "Guardando...",
        "app.language" => "Idioma",

        "patient.title" => "Gestión de Pacientes",
        "patient.addNew" => "Agregar Paciente",
        "patient.addFirst" => "Agregar primer paciente",
        "patient.editPatient" => "Editar Paciente",
        "patient.deletePatient" => "Eliminar Paciente",
        "patient.noPatients" => "Aún no hay pacientes",
        "patient.startAdding" => "Comienza agregando tu primer paciente",
        "patient.name" => "Nombre",
        "patient.namePlaceholder" => "Nombre completo",
        "patient.avatar" => "URL del avatar",
        "patient.avatarPlaceholder" => "https://ejemplo.com/avatar.png",
        "patient.description" => "Descripción",
        "patient.descriptionPlaceholder" => "Notas clínicas, historial, observaciones...",
        "patient.website" => "Sitio web",
        "patient.websitePlaceholder" => "https://ejemplo.com",
        "patient.patientId" => "ID del paciente",
        "patient.createdAt" => "Creado",
        "patient.showMore" => "Ver más",
        "patient.showLess" => "Ver menos",

        "validation.nameRequired" => "El nombre es obligatorio",
        "validation.nameMinLength" => "El nombre debe tener al menos 2 caracteres",
        "validation.nameMaxLength" => "El nombre no puede exceder 50 caracteres",
        "validation.nameInvalid" => "El nombre solo puede contener letras y espacios",
        "validation.avatarRequired" => "La URL del avatar es obligatoria",
        "validation.avatarInvalid" => "El avatar debe ser una URL válida",
        "validation.descriptionRequired" => "La descripción es obligatoria",
        "validation.descriptionMinLength" => "La descripción debe tener al menos 5 caracteres",
        "validation.websiteRequired" => "El sitio web es obligatorio",
        "validation.websiteInvalid" => "El sitio web debe ser una URL válida",

        "notifications.patientCreated" => "Paciente creado exitosamente",
        "notifications.patientUpdated" => "Paciente actualizado exitosamente",
        "notifications.patientDeleted" => "Paciente eliminado exitosamente",
        "notifications.errorLoading" => "Error al cargar los pacientes",
        "notifications.errorCreating" => "Error al crear el paciente",
        "notifications.errorUpdating" => "Error al actualizar el paciente",
        "notifications.errorDeleting" => "Error al eliminar el paciente",

        "confirmDialog.deleteTitle" => "Eliminar paciente",
        "confirmDialog.deleteMessage" => {
            "¿Estás seguro de que deseas eliminar a {{name}}? Esta acción no se puede deshacer."
        }
        "confirmDialog.deleteConfirm" => "Eliminar",
        "confirmDialog.deleteCancel" => "Cancelar",
        _ => return None,
    };
    Some(text)
}
