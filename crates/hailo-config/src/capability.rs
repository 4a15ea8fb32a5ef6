//! Capability classification of applications.

use crate::catalog::ResourceCatalog;

impl ResourceCatalog {
    /// Whether any model of `app`, on any architecture, comes from the
    /// generative model zoo.
    pub fn is_gen_ai_app(&self, app: &str) -> bool {
        self.supported_architectures(app)
            .iter()
            .any(|arch| self.all_models(app, arch).iter().any(|m| m.is_gen_ai()))
    }
}
