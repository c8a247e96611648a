//! Internal proc-macros for fixvec.
//!
//! The vector family is one generic type, but the per-arity named accessors and the
//! `arity x element type` alias matrix are repetitive. These macros generate them so the
//! listing in fixvec stays declarative and rust-analyzer can expand each item.
//!
//! This crate is internal to fixvec and not intended for external use.

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Ident, LitInt, Token, Type,
};

/// One arity line: `3 => x y z;`
struct ArityFields {
    arity: usize,
    names: Vec<Ident>,
}

impl Parse for ArityFields {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let arity = lit.base10_parse::<usize>()?;
        input.parse::<Token![=>]>()?;

        let mut names = Vec::new();
        while !input.peek(Token![;]) && !input.is_empty() {
            names.push(input.parse::<Ident>()?);
        }
        input.parse::<Token![;]>()?;

        if names.len() != arity {
            return Err(syn::Error::new(
                lit.span(),
                format!("arity {arity} lists {} field names", names.len()),
            ));
        }

        Ok(Self { arity, names })
    }
}

struct NamedFieldsArgs {
    lines: Vec<ArityFields>,
}

impl Parse for NamedFieldsArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut lines = Vec::new();
        while !input.is_empty() {
            lines.push(input.parse()?);
        }
        Ok(Self { lines })
    }
}

/// Generates named component accessors for each listed arity.
///
/// # Usage
/// ```ignore
/// named_fields! {
///     2 => x y;
///     3 => x y z;
///     4 => a b c d;
/// }
/// ```
///
/// For every name this generates, on `crate::Vector<T, N>`:
/// - `name(&self) -> T`
/// - `name_mut(&mut self) -> &mut T`
/// - `set_name(&mut self, value: T)`
#[proc_macro]
pub fn named_fields(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as NamedFieldsArgs);

    let impls = args.lines.iter().map(|line| {
        let arity = Literal::usize_unsuffixed(line.arity);

        let accessors = line.names.iter().enumerate().map(|(index, name)| {
            let index = Literal::usize_unsuffixed(index);
            let name_mut = format_ident!("{}_mut", name);
            let set_name = format_ident!("set_{}", name);
            let get_doc = format!("Returns the `{name}` component (position {index}).");
            let mut_doc = format!("Mutable reference to the `{name}` component.");
            let set_doc = format!("Overwrites the `{name}` component.");

            quote! {
                #[doc = #get_doc]
                #[inline]
                pub fn #name(&self) -> T {
                    self.as_array()[#index]
                }

                #[doc = #mut_doc]
                #[inline]
                pub fn #name_mut(&mut self) -> &mut T {
                    &mut self.as_mut_array()[#index]
                }

                #[doc = #set_doc]
                #[inline]
                pub fn #set_name(&mut self, value: T) {
                    self.as_mut_array()[#index] = value;
                }
            }
        });

        quote! {
            impl<T> crate::Vector<T, #arity>
            where
                T: crate::Scalar,
            {
                #(#accessors)*
            }
        }
    });

    TokenStream::from(quote! { #(#impls)* })
}

/// `f: f32`
struct AliasSpec {
    suffix: Ident,
    ty: Type,
}

impl Parse for AliasSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let suffix = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty = input.parse()?;
        Ok(Self { suffix, ty })
    }
}

/// Arguments for the vector_aliases! macro.
/// Format: vector_aliases!(MIN..=MAX; suffix: Type, ...)
struct VectorAliasesArgs {
    min: usize,
    max: usize,
    specs: Punctuated<AliasSpec, Token![,]>,
}

impl Parse for VectorAliasesArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let min: LitInt = input.parse()?;
        input.parse::<Token![..=]>()?;
        let max: LitInt = input.parse()?;
        input.parse::<Token![;]>()?;

        let (min_value, max_value) = (min.base10_parse()?, max.base10_parse()?);
        if min_value > max_value {
            return Err(syn::Error::new(Span::call_site(), "empty arity range"));
        }

        Ok(Self {
            min: min_value,
            max: max_value,
            specs: Punctuated::parse_terminated(input)?,
        })
    }
}

/// Generates `Vector{N}{suffix}` type aliases for every arity in the range.
///
/// # Usage
/// ```ignore
/// vector_aliases!(2..=10; f: f32, d: f64);
/// ```
///
/// expands to `pub type Vector2f = crate::Vector<f32, 2>;` ... `pub type Vector10d = crate::Vector<f64, 10>;`
#[proc_macro]
pub fn vector_aliases(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as VectorAliasesArgs);

    let aliases = args.specs.iter().flat_map(|spec| {
        let AliasSpec { suffix, ty } = spec;
        let ty_name = quote!(#ty).to_string();

        (args.min..=args.max).map(move |arity| {
            let alias = format_ident!("Vector{}{}", arity, suffix);
            let doc = format!("{arity}-component vector of `{ty_name}`.");
            let arity = Literal::usize_unsuffixed(arity);

            quote! {
                #[doc = #doc]
                pub type #alias = crate::Vector<#ty, #arity>;
            }
        })
    });

    TokenStream::from(quote! { #(#aliases)* })
}
