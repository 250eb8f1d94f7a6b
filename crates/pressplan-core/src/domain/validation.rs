use crate::domain::{
    entities::BuildContext, error::DomainError, naming::OutputExtensions,
    value_objects::TemplateCategory,
};

/// Checks run on a [`BuildContext`] before discovery.
pub struct DomainValidator;

impl DomainValidator {
    /// Everything that must hold before discovery is allowed to run. The
    /// deployment flags are checked first so a conflict is always the error
    /// reported.
    pub fn validate_context(ctx: &BuildContext) -> Result<(), DomainError> {
        ctx.descriptor().validate()?;
        Self::validate_extensions(ctx.extensions())
    }

    fn validate_extensions(extensions: &OutputExtensions) -> Result<(), DomainError> {
        for category in TemplateCategory::RESOLVABLE {
            let Some(ext) = extensions.for_category(category) else {
                continue;
            };
            if ext.is_empty() {
                return Err(DomainError::InvalidValue {
                    field: "output extension",
                    reason: format!("{category} has an empty output extension"),
                });
            }
            if ext.contains(['/', '\\']) {
                return Err(DomainError::InvalidValue {
                    field: "output extension",
                    reason: format!("'{ext}' contains a path separator"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectDescriptor;

    fn ctx(descriptor: ProjectDescriptor, extensions: OutputExtensions) -> BuildContext {
        BuildContext::new(descriptor, "/srv/www/site")
            .unwrap()
            .with_extensions(extensions)
    }

    #[test]
    fn defaults_pass() {
        let ctx = ctx(ProjectDescriptor::new("Site"), OutputExtensions::default());
        assert!(DomainValidator::validate_context(&ctx).is_ok());
    }

    #[test]
    fn empty_extension_is_rejected() {
        let ctx = ctx(ProjectDescriptor::new("Site"), OutputExtensions::new(".", "php"));
        assert!(matches!(
            DomainValidator::validate_context(&ctx),
            Err(DomainError::InvalidValue { field: "output extension", .. })
        ));
    }

    #[test]
    fn path_separator_is_rejected() {
        let ctx = ctx(ProjectDescriptor::new("Site"), OutputExtensions::new("html", "x/php"));
        assert!(DomainValidator::validate_context(&ctx).is_err());
    }

    #[test]
    fn flag_conflict_wins_over_bad_extension() {
        let descriptor = ProjectDescriptor::new("Site").apache(true).wordpress(true);
        let ctx = ctx(descriptor, OutputExtensions::new("", "php"));
        assert!(matches!(
            DomainValidator::validate_context(&ctx),
            Err(DomainError::InvalidDeploymentConfig { .. })
        ));
    }
}
