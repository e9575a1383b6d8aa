use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Field, Fields, Meta, NestedMeta};

/// Implements `verdict_core::Failure` for a struct with named fields.
///
/// ```ignore
/// #[derive(Debug, Failure)]
/// struct Timeout {
///     message: String,
/// }
///
/// #[derive(Debug, Failure)]
/// struct ReadTimeout {
///     #[failure(base)]
///     base: Timeout,
///     bytes_read: usize,
/// }
/// ```
///
/// The message is the field marked `#[failure(message)]` or, when none is
/// marked, the field called `message`. A field marked `#[failure(base)]` is
/// the more general kind this one extends. Such a failure has no message
/// field of its own, the message always comes from the base so that handlers
/// for the base and for the derived kind read the same text.
#[proc_macro_derive(Failure, attributes(failure))]
pub fn derive_failure(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand(input).unwrap_or_else(|e| e.to_compile_error());

    // Hand the output tokens back to the compiler.
    proc_macro::TokenStream::from(expanded)
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = named_fields(&input)?;
    let message = message_field(&fields)?;
    let base = marked_field(&fields, "base")?;

    let message_body = match (message, base) {
        (Some(field), Some(_)) => {
            return Err(syn::Error::new(
                field.span(),
                "a failure with a #[failure(base)] field takes its message from the base, \
                 remove the message field",
            ))
        }
        (Some(field), None) => {
            let ident = &field.ident;
            quote_spanned!(field.span() =>
                ::std::convert::AsRef::<str>::as_ref(&self.#ident)
            )
        }
        (None, Some(field)) => {
            let ident = &field.ident;
            quote_spanned!(field.span() =>
                ::verdict_core::Failure::message(&self.#ident)
            )
        }
        (None, None) => {
            return Err(syn::Error::new(
                name.span(),
                "Failure derive needs a `message` field, a field marked \
                 #[failure(message)] or a field marked #[failure(base)]",
            ))
        }
    };

    let base_fn = base.map(|field| {
        let ident = &field.ident;
        quote_spanned!(field.span() =>
            fn base(&self) -> ::std::option::Option<&dyn ::verdict_core::Failure> {
                ::std::option::Option::Some(&self.#ident)
            }
        )
    });

    Ok(quote! {
        impl #impl_generics ::verdict_core::Failure for #name #ty_generics #where_clause {
            fn message(&self) -> &str {
                #message_body
            }

            #base_fn
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match input.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => Ok(fields.named.iter().collect()),
            Fields::Unnamed(_) | Fields::Unit => Err(syn::Error::new(
                input.ident.span(),
                "Failure derive supports only structs with named fields",
            )),
        },
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new(
            input.ident.span(),
            "Failure derive supports only structs",
        )),
    }
}

fn message_field<'f>(fields: &[&'f Field]) -> syn::Result<Option<&'f Field>> {
    if let Some(field) = marked_field(fields, "message")? {
        return Ok(Some(field));
    }
    Ok(fields
        .iter()
        .copied()
        .find(|field| field.ident.as_ref().map_or(false, |i| i == "message")))
}

/// Returns the single field carrying `#[failure(<marker>)]`.
fn marked_field<'f>(fields: &[&'f Field], marker: &str) -> syn::Result<Option<&'f Field>> {
    let mut found: Option<&Field> = None;
    for field in fields.iter().copied() {
        if !has_marker(&field.attrs, marker)? {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new(
                field.span(),
                format!("only one field can be marked #[failure({})]", marker),
            ));
        }
        found = Some(field);
    }
    Ok(found)
}

fn has_marker(attrs: &[Attribute], marker: &str) -> syn::Result<bool> {
    let mut marked = false;
    for attr in attrs.iter().filter(|a| a.path.is_ident("failure")) {
        let list = match attr.parse_meta()? {
            Meta::List(list) => list,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "expected #[failure(message)] or #[failure(base)]",
                ))
            }
        };
        for nested in list.nested.iter() {
            match nested {
                NestedMeta::Meta(Meta::Path(path))
                    if path.is_ident("message") || path.is_ident("base") =>
                {
                    if path.is_ident(marker) {
                        marked = true;
                    }
                }
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "unknown failure attribute, expected `message` or `base`",
                    ))
                }
            }
        }
    }
    Ok(marked)
}
