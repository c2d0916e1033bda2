//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const NAMESPACE: &'static str = "namespace";
    pub const CLASS: &'static str = "class";
    pub const BASE_TYPE: &'static str = "baseType";
    pub const BASE_TYPE_NAME: &'static str = "baseTypeName";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}
