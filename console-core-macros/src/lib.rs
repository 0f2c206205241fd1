use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derive `Debug`, printing `<redacted>` for every field marked `#[redact]`.
///
/// Used on types that carry HTTP client handles, callbacks or credentials,
/// which either have no `Debug` impl or must never reach the logs.
#[proc_macro_derive(Redacted, attributes(redact))]
pub fn derive_redacted(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident.clone();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match input.data {
        Data::Struct(ref data) => {
            let bindings = field_bindings(&data.fields);
            let pattern = destructure(quote! { #name }, &data.fields, &bindings);
            let writes = field_writes(&data.fields, &bindings);
            let label = quote! { stringify!(#name) };
            let build = debug_builder(&data.fields, label, writes);
            quote! {
                let #pattern = self;
                #build
            }
        }
        Data::Enum(ref data) => {
            let arms = data.variants.iter().map(|v| {
                let vident = &v.ident;
                let bindings = field_bindings(&v.fields);
                let pattern = destructure(quote! { #name::#vident }, &v.fields, &bindings);
                let writes = field_writes(&v.fields, &bindings);
                let label = quote! { concat!(stringify!(#name), "::", stringify!(#vident)) };
                let build = debug_builder(&v.fields, label, writes);
                quote! { #pattern => { #build } }
            });
            quote! {
                match self {
                    #(#arms),*
                }
            }
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(name, "Redacted derive does not support unions")
                .to_compile_error()
                .into();
        }
    };

    quote! {
        impl #impl_generics std::fmt::Debug for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                #body
            }
        }
    }
    .into()
}

fn is_redacted(field: &syn::Field) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident("redact"))
}

fn field_bindings(fields: &Fields) -> Vec<syn::Ident> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|f| f.ident.clone())
            .collect(),
        Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len())
            .map(|i| format_ident!("f{}", i))
            .collect(),
        Fields::Unit => Vec::new(),
    }
}

fn destructure(
    path: proc_macro2::TokenStream,
    fields: &Fields,
    bindings: &[syn::Ident],
) -> proc_macro2::TokenStream {
    match fields {
        Fields::Named(_) => quote! { #path { #( #bindings ),* } },
        Fields::Unnamed(_) => quote! { #path ( #( #bindings ),* ) },
        Fields::Unit => quote! { #path },
    }
}

fn field_writes(fields: &Fields, bindings: &[syn::Ident]) -> Vec<proc_macro2::TokenStream> {
    let iter: Vec<&syn::Field> = match fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
        Fields::Unit => Vec::new(),
    };
    iter.into_iter()
        .zip(bindings)
        .map(|(field, binding)| {
            let value = if is_redacted(field) {
                quote! { &format_args!("<redacted>") }
            } else {
                quote! { #binding }
            };
            match fields {
                Fields::Named(_) => quote! { d.field(stringify!(#binding), #value); },
                _ => quote! { d.field(#value); },
            }
        })
        .collect()
}

fn debug_builder(
    fields: &Fields,
    label: proc_macro2::TokenStream,
    writes: Vec<proc_macro2::TokenStream>,
) -> proc_macro2::TokenStream {
    match fields {
        Fields::Named(_) => quote! {
            let mut d = f.debug_struct(#label);
            #(#writes)*
            d.finish()
        },
        Fields::Unnamed(_) => quote! {
            let mut d = f.debug_tuple(#label);
            #(#writes)*
            d.finish()
        },
        Fields::Unit => quote! { f.write_str(#label) },
    }
}
