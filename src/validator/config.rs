use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ValidatorConfig {
    /// Folds Persian and Arabic-Indic digits to ASCII before validation.
    /// Off by default, every engine then rejects them.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub fold_native_digits: bool,
}

impl ValidatorConfig {
    pub fn fold_native_digits(&self, fold_native_digits: bool) -> Self {
        self.mutate_clone(|x| x.fold_native_digits = fold_native_digits)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
