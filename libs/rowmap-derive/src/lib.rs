use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, Type, parse_macro_input};

/// Derive macro for mappable records.
///
/// Implements `rowmap::Record`, `rowmap::RecordMut` and `rowmap::RecordType`
/// on the annotated struct. The schema is built on first use and cached.
///
/// # Example
///
/// ```ignore
/// #[derive(Record, Default)]
/// pub struct Student {
///     #[csv("name")]
///     pub name: String,
///     pub age: i32,
///
///     #[csv("手机号,phone_desensitization")]
///     pub phone: String,
/// }
/// ```
///
/// Decodable field types: `bool`, `String`, `i8`..`i64`, `isize`, `u8`..`u64`,
/// `usize`, `f32`, `f64`. Any other type must implement `Display`; it encodes
/// through `to_string()` and fails to decode with `UnsupportedType`.
///
/// Types are recognised by the last segment of their path, before any alias
/// is resolved: a field declared as `type Age = i32;` is treated as
/// unsupported and fails to decode at run time. Spell out the scalar type.
///
/// Decoding into `Vec<T>` additionally requires `Default`.
#[proc_macro_derive(Record, attributes(csv))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let name = &input.ident;
    let name_str = name.to_string();

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record only supports structs",
            ))
        }
    };

    let mut descriptor_tokens = Vec::new();
    let mut getter_tokens = Vec::new();
    let mut setter_tokens = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let field_name = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "expected named field")
        })?;
        let field_name_str = field_name.to_string();
        let field_name_str = field_name_str.strip_prefix("r#").unwrap_or(&field_name_str).to_string();
        let field_ty = &field.ty;

        // Parse #[csv("<column>[,<transform>]")] attribute.
        let mut tag: Option<String> = None;
        for attr in &field.attrs {
            if !attr.path().is_ident("csv") {
                continue;
            }
            if tag.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate #[csv(...)] attribute"));
            }
            let value: LitStr = attr.parse_args()?;
            tag = Some(value.value());
        }

        let tag_expr = match &tag {
            Some(tag) => quote! { Some(#tag) },
            None => quote! { None },
        };

        let decodable = type_ident_name(field_ty)
            .is_some_and(|ty_name| DECODABLE.contains(&ty_name.as_str()));

        let (kind_expr, getter_expr, setter_expr) = if decodable {
            (
                quote! { <#field_ty as ::rowmap::FieldValue>::KIND },
                quote! { ::rowmap::FieldValue::to_value(&self.#field_name) },
                quote! {
                    ::rowmap::coerce::assign(
                        &mut self.#field_name,
                        value,
                        <Self as ::rowmap::RecordType>::describe(),
                        #index,
                    )
                },
            )
        } else {
            let ty_str = quote!(#field_ty).to_string().replace(' ', "");
            (
                quote! { ::rowmap::ScalarKind::Unsupported { type_name: #ty_str } },
                quote! {
                    ::rowmap::Value::String(::std::borrow::Cow::Owned(
                        ::std::string::ToString::to_string(&self.#field_name)
                    ))
                },
                quote! {
                    ::rowmap::coerce::unsupported(<Self as ::rowmap::RecordType>::describe(), #index)
                },
            )
        };

        descriptor_tokens.push(quote! {
            ::rowmap::FieldDescriptor::from_tag(#field_name_str, #index, #tag_expr, #kind_expr)
        });
        getter_tokens.push(quote! { #index => Some(#getter_expr), });
        setter_tokens.push(quote! { #index => #setter_expr, });
    }

    let expanded = quote! {
        impl ::rowmap::Record for #name {
            fn schema(&self) -> &'static ::rowmap::RecordSchema {
                <Self as ::rowmap::RecordType>::describe()
            }

            fn value(&self, index: usize) -> Option<::rowmap::Value<'_>> {
                match index {
                    #(#getter_tokens)*
                    _ => None,
                }
            }
        }

        impl ::rowmap::RecordMut for #name {
            #[allow(unused_variables)]
            fn set_value(
                &mut self,
                index: usize,
                value: ::rowmap::Value<'_>,
            ) -> Result<(), ::rowmap::MapError> {
                match index {
                    #(#setter_tokens)*
                    _ => Err(::rowmap::MapError::target(
                        <Self as ::rowmap::RecordType>::describe(),
                        index,
                    )),
                }
            }
        }

        impl ::rowmap::RecordType for #name {
            fn describe() -> &'static ::rowmap::RecordSchema {
                static SCHEMA: ::std::sync::OnceLock<::rowmap::RecordSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    ::rowmap::RecordSchema::new(
                        #name_str,
                        vec![
                            #(#descriptor_tokens),*
                        ],
                    )
                })
            }
        }
    };

    Ok(TokenStream::from(expanded))
}

/// Field types with a coercion rule, matched on the last path segment.
const DECODABLE: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize", "f32",
    "f64",
];

/// Extract the last path segment ident name from a type (e.g. `u64`, `String`).
fn type_ident_name(ty: &Type) -> Option<String> {
    if let Type::Path(type_path) = ty {
        type_path
            .path
            .segments
            .last()
            .filter(|seg| seg.arguments.is_empty())
            .map(|seg| seg.ident.to_string())
    } else {
        None
    }
}
