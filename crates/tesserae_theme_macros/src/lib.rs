use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Meta, Type, parse_macro_input};

/// Derives token lookup for a fieldless enum whose variants each name a field
/// of a token container.
///
/// ```ignore
/// #[derive(ThemeToken)]
/// #[source(ThemeColors)]
/// #[field(HexColor)]
/// enum ColorToken {
///     #[theme(background)]
///     Background,
/// }
/// ```
///
/// Generates `ALL`, `key()` (the variant name in camelCase), `resolve()` and
/// `resolve_mut()`.
#[proc_macro_derive(ThemeToken, attributes(theme, field, source))]
pub fn theme_token_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let variants = if let Data::Enum(data_enum) = input.data {
        data_enum.variants
    } else {
        panic!("#[derive(ThemeToken)] can only be used on enums");
    };

    let field_type = get_enum_type(&input.attrs, "field");
    let source_type = get_enum_type(&input.attrs, "source");

    let mut idents = Vec::with_capacity(variants.len());
    let mut keys = Vec::with_capacity(variants.len());
    let mut field_paths = Vec::with_capacity(variants.len());

    for variant in &variants {
        if !matches!(variant.fields, Fields::Unit) {
            panic!("#[derive(ThemeToken)] variants can't carry data");
        }

        idents.push(variant.ident.clone());
        keys.push(lower_camel(&variant.ident.to_string()));
        field_paths.push(get_theme_expr(&variant.attrs));
    }

    let count = idents.len();

    let expanded = quote! {
        impl #name {
            /// Every token, in declaration order.
            pub const ALL: [#name; #count] = [#(#name::#idents),*];

            /// The camelCase key used in serialized themes.
            pub const fn key(&self) -> &'static str {
                match self {
                    #(#name::#idents => #keys,)*
                }
            }

            pub fn resolve<'a>(&self, theme: &'a #source_type) -> &'a #field_type {
                match self {
                    #(#name::#idents => &theme.#field_paths,)*
                }
            }

            pub fn resolve_mut<'a>(&self, theme: &'a mut #source_type) -> &'a mut #field_type {
                match self {
                    #(#name::#idents => &mut theme.#field_paths,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn lower_camel(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn get_theme_expr(attrs: &[Attribute]) -> Expr {
    let theme_attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("theme"))
        .expect("Variant is missing #[theme(...)] attribute");

    match &theme_attr.meta {
        Meta::List(list) => {
            syn::parse2(list.tokens.clone()).expect("Expected a field path inside #[theme(...)]")
        }
        _ => panic!("#[theme(...)] must be a list"),
    }
}

fn get_enum_type(attrs: &[Attribute], ident: &str) -> Type {
    let attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident(ident))
        .unwrap_or_else(|| panic!("Enum is missing #[{ident}(...)] attribute"));

    match &attr.meta {
        Meta::List(meta_list) => syn::parse2::<Type>(meta_list.tokens.clone())
            .unwrap_or_else(|_| panic!("#[{ident}(...)] must contain a valid type")),
        _ => panic!("#[{ident}(...)] must be a list, like #[{ident}(String)]"),
    }
}
