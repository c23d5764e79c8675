use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Type};

/// Derive macro that documents a struct's CSV column layout.
///
/// For each named field it records:
/// - the column name (respecting `#[serde(rename = "...")]`)
/// - whether it is required (any non-`Option<T>` type)
/// - a description taken from the field's doc comment
///
/// Generates `fn csv_columns() -> &'static [CsvColumn]`; the `CsvColumn`
/// type must be in scope at the derive site.
#[proc_macro_derive(CsvColumns, attributes(serde))]
pub fn derive_csv_columns(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("CsvColumns only supports structs with named fields"),
        },
        _ => panic!("CsvColumns only supports structs"),
    };

    let entries = fields.iter().map(|field| {
        let field_name = field.ident.as_ref().unwrap().to_string();
        let column_name = serde_rename(&field.attrs).unwrap_or(field_name);
        let required = !is_option(&field.ty);
        let description = doc_comment(&field.attrs);

        quote! {
            CsvColumn {
                name: #column_name,
                required: #required,
                description: #description,
            }
        }
    });

    let expanded = quote! {
        impl #name {
            pub fn csv_columns() -> &'static [CsvColumn] {
                static COLUMNS: &[CsvColumn] = &[
                    #(#entries),*
                ];
                COLUMNS
            }
        }
    };

    TokenStream::from(expanded)
}

fn serde_rename(attrs: &[Attribute]) -> Option<String> {
    let mut rename = None;
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        // Ignore any serde attributes we don't understand.
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                rename = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        });
    }
    rename
}

fn doc_comment(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let syn::Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let syn::Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Option";
        }
    }
    false
}
