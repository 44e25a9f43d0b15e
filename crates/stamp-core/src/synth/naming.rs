use convert_case::{Case, Casing};
use stamp_config::MemberNaming;

/// `getCreated` / `created`
#[must_use]
pub fn getter_name(naming: MemberNaming, field: &str) -> String {
    match naming {
        MemberNaming::Bean => format!("get{}", field.to_case(Case::UpperCamel)),
        MemberNaming::Snake => field.to_case(Case::Snake),
    }
}

/// `setCreated` / `set_created`
#[must_use]
pub fn setter_name(naming: MemberNaming, field: &str) -> String {
    match naming {
        MemberNaming::Bean => format!("set{}", field.to_case(Case::UpperCamel)),
        MemberNaming::Snake => format!("set_{}", field.to_case(Case::Snake)),
    }
}

/// `onUpdate` / `on_update`
#[must_use]
pub fn hook_name(naming: MemberNaming, event: &str) -> String {
    match naming {
        MemberNaming::Bean => format!("on{}", event.to_case(Case::UpperCamel)),
        MemberNaming::Snake => format!("on_{}", event.to_case(Case::Snake)),
    }
}
