use serde::{Deserialize, Serialize};

/// Shop details printed on quotes. Stored under the `dados_empresa` config key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub name: String,
    /// CNPJ or CPF.
    pub document: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}
