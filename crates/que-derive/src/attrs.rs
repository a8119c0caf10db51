//! Parsing of `#[que(...)]` attributes.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use syn::{Attribute, LitStr, Result};

/// Container-level `rename_all` rule.
#[derive(Clone, Copy)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Snake,
    ScreamingSnake,
    Kebab,
    Camel,
    Pascal,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self> {
        let rule = match lit.value().as_str() {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            "camelCase" => Self::Camel,
            "PascalCase" => Self::Pascal,
            other => {
                return Err(syn::Error::new_spanned(
                    lit,
                    format!("unknown rename_all rule `{other}`"),
                ));
            }
        };
        Ok(rule)
    }

    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
            Self::Snake => name.to_snake_case(),
            Self::ScreamingSnake => name.to_shouty_snake_case(),
            Self::Kebab => name.to_kebab_case(),
            Self::Camel => name.to_lower_camel_case(),
            Self::Pascal => name.to_upper_camel_case(),
        }
    }
}

#[derive(Default)]
pub(crate) struct ContainerAttr {
    pub rename_all: Option<RenameRule>,
}

#[derive(Default)]
pub(crate) struct FieldAttr {
    pub rename: Option<String>,
    pub skip: bool,
}

pub(crate) fn container_attr(attrs: &[Attribute]) -> Result<ContainerAttr> {
    let mut out = ContainerAttr::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("que")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let lit: LitStr = meta.value()?.parse()?;
                out.rename_all = Some(RenameRule::parse(&lit)?);
                Ok(())
            } else {
                Err(meta.error("unsupported container attribute, expected `rename_all`"))
            }
        })?;
    }
    Ok(out)
}

pub(crate) fn field_attr(attrs: &[Attribute]) -> Result<FieldAttr> {
    let mut out = FieldAttr::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("que")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                out.rename = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                out.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported field attribute, expected `rename` or `skip`"))
            }
        })?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_rules() {
        assert_eq!(RenameRule::Camel.apply("user_name"), "userName");
        assert_eq!(RenameRule::Pascal.apply("user_name"), "UserName");
        assert_eq!(RenameRule::ScreamingSnake.apply("user_name"), "USER_NAME");
        assert_eq!(RenameRule::Kebab.apply("user_name"), "user-name");
        assert_eq!(RenameRule::Upper.apply("user_name"), "USER_NAME");
    }

    #[test]
    fn parse_field_attrs() {
        let input: syn::DeriveInput = syn::parse_quote! {
            struct Foo {
                #[que(rename = "mail", skip)]
                email: String,
            }
        };
        let syn::Data::Struct(data) = &input.data else {
            panic!("expected a struct");
        };
        let field = data.fields.iter().next().unwrap();
        let attr = field_attr(&field.attrs).unwrap();
        assert_eq!(attr.rename.as_deref(), Some("mail"));
        assert!(attr.skip);
    }

    #[test]
    fn reject_unknown_rule() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[que(rename_all = "Title Case")]
            struct Foo { a: i32 }
        };
        assert!(container_attr(&input.attrs).is_err());
    }
}
