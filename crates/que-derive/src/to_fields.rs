//! ToFields derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

use crate::attrs::{container_attr, field_attr};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "ToFields can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "ToFields can only be derived for structs",
            ));
        }
    };

    let container = container_attr(&input.attrs)?;

    let mut pairs = Vec::with_capacity(fields.len());
    for field in fields {
        let attr = field_attr(&field.attrs)?;
        if attr.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        // raw identifiers keep their `r#` out of the column name
        let rust_name = ident.to_string();
        let rust_name = rust_name.trim_start_matches("r#");
        let column = match (attr.rename, container.rename_all) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply(rust_name),
            (None, None) => rust_name.to_string(),
        };
        pairs.push(quote! {
            (
                ::std::string::String::from(#column),
                ::que::__private::to_value(&self.#ident)?,
            )
        });
    }

    Ok(quote! {
        impl #impl_generics ::que::ToFields for #name #ty_generics #where_clause {
            fn to_field_pairs(
                &self,
            ) -> ::que::QueResult<::std::vec::Vec<(::std::string::String, ::que::Value)>> {
                ::std::result::Result::Ok(::std::vec![#(#pairs),*])
            }
        }
    })
}
