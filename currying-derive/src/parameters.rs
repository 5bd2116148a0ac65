//! Reading the parameter list of a curried `fn` item.
//!
//! Each typed parameter becomes one entry of the runtime signature:
//!
//! - a plain parameter is required;
//! - `#[default(expr)]` gives it a default value;
//! - `#[variadic]` on a trailing `Vec<T>` parameter collects surplus
//!   positional arguments;
//! - `#[keywords]` on a last `HashMap<String, T>` parameter collects named
//!   arguments that match no other parameter.
//!
//! Every parameter must have the same value type, which becomes the `V` of
//! the generated `Curried<_, V>`. That type cannot borrow: the generated
//! constructor takes no arguments to tie a lifetime to.

use quote::ToTokens;
use syn::{
    Attribute, Expr, FnArg, GenericArgument, Pat, PatType, PathArguments, Signature, Type,
    spanned::Spanned,
};

const DEFAULT_ATTRIBUTE: &str = "default";
const VARIADIC_ATTRIBUTE: &str = "variadic";
const KEYWORDS_ATTRIBUTE: &str = "keywords";

pub enum ParameterKind {
    Required,
    Defaulted(Expr),
    Variadic,
    Keywords,
}

pub struct CurriedParameter {
    pub name: String,
    /// The parameter as declared, minus the currying attributes.
    pub declaration: PatType,
    pub kind: ParameterKind,
}

pub struct CurriedSignature {
    pub parameters: Vec<CurriedParameter>,
    pub value_type: Type,
}

impl CurriedSignature {
    pub fn fixed(&self) -> impl Iterator<Item = &CurriedParameter> {
        self.parameters.iter().filter(|parameter| {
            matches!(
                parameter.kind,
                ParameterKind::Required | ParameterKind::Defaulted(_)
            )
        })
    }

    pub fn is_variadic(&self) -> bool {
        self.parameters
            .iter()
            .any(|parameter| matches!(parameter.kind, ParameterKind::Variadic))
    }

    pub fn accepts_keywords(&self) -> bool {
        self.parameters
            .iter()
            .any(|parameter| matches!(parameter.kind, ParameterKind::Keywords))
    }
}

pub fn read_signature(signature: &Signature) -> syn::Result<CurriedSignature> {
    check_plain_function(signature)?;

    let count = signature.inputs.len();
    let mut parameters = Vec::with_capacity(count);
    let mut value_type: Option<Type> = None;
    let mut defaulted = false;

    for (index, input) in signature.inputs.iter().enumerate() {
        let typed = match input {
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new(
                    receiver.span(),
                    "curried functions cannot take `self`",
                ));
            }
            FnArg::Typed(typed) => typed,
        };

        let parameter = read_parameter(typed)?;

        let parameter_type = match parameter.kind {
            ParameterKind::Variadic => {
                let keywords_follow = index + 2 == count
                    && signature.inputs.iter().nth(index + 1).is_some_and(has_keywords_attribute);
                if index + 1 != count && !keywords_follow {
                    return Err(syn::Error::new(
                        typed.span(),
                        "#[variadic] must mark the last parameter, or the one before #[keywords]",
                    ));
                }
                vec_element_type(&typed.ty)?
            }
            ParameterKind::Keywords => {
                if index + 1 != count {
                    return Err(syn::Error::new(
                        typed.span(),
                        "#[keywords] must mark the last parameter",
                    ));
                }
                map_value_type(&typed.ty)?
            }
            ParameterKind::Required => {
                if defaulted {
                    return Err(syn::Error::new(
                        typed.span(),
                        format!(
                            "required parameter `{}` cannot follow a parameter with a default",
                            parameter.name
                        ),
                    ));
                }
                (*typed.ty).clone()
            }
            ParameterKind::Defaulted(_) => {
                defaulted = true;
                (*typed.ty).clone()
            }
        };

        match &value_type {
            None => value_type = Some(parameter_type),
            Some(expected) if same_type(expected, &parameter_type) => {}
            Some(expected) => {
                return Err(syn::Error::new(
                    typed.ty.span(),
                    format!(
                        "all parameters of a curried function must share one type: expected `{}`, found `{}`",
                        expected.to_token_stream(),
                        parameter_type.to_token_stream()
                    ),
                ));
            }
        }

        parameters.push(parameter);
    }

    let value_type = value_type.ok_or_else(|| {
        syn::Error::new(
            signature.ident.span(),
            "curried functions need at least one parameter to infer the argument type",
        )
    })?;
    check_owned(&value_type)?;

    Ok(CurriedSignature {
        parameters,
        value_type,
    })
}

fn check_plain_function(signature: &Signature) -> syn::Result<()> {
    if !signature.generics.params.is_empty() || signature.generics.where_clause.is_some() {
        return Err(syn::Error::new(
            signature.generics.span(),
            "curried functions cannot be generic",
        ));
    }
    if let Some(token) = &signature.asyncness {
        return Err(syn::Error::new(token.span(), "curried functions cannot be async"));
    }
    if let Some(token) = &signature.constness {
        return Err(syn::Error::new(token.span(), "curried functions cannot be const"));
    }
    if let Some(token) = &signature.unsafety {
        return Err(syn::Error::new(token.span(), "curried functions cannot be unsafe"));
    }
    if let Some(abi) = &signature.abi {
        return Err(syn::Error::new(abi.span(), "curried functions cannot declare an ABI"));
    }
    if let Some(variadic) = &signature.variadic {
        return Err(syn::Error::new(
            variadic.span(),
            "C variadics are not supported; use #[variadic] on a trailing Vec parameter",
        ));
    }
    Ok(())
}

fn read_parameter(typed: &PatType) -> syn::Result<CurriedParameter> {
    let name = match &*typed.pat {
        Pat::Ident(pattern) if pattern.subpat.is_none() => pattern.ident.to_string(),
        other => {
            return Err(syn::Error::new(
                other.span(),
                "curried parameters must be plain identifiers",
            ));
        }
    };

    let mut kind = ParameterKind::Required;
    let mut kept: Vec<Attribute> = Vec::with_capacity(typed.attrs.len());

    for attribute in &typed.attrs {
        if attribute.path().is_ident(DEFAULT_ATTRIBUTE) {
            let expression = attribute.parse_args::<Expr>()?;
            kind = merge_kind(kind, ParameterKind::Defaulted(expression), attribute)?;
        } else if attribute.path().is_ident(VARIADIC_ATTRIBUTE) {
            attribute.meta.require_path_only()?;
            kind = merge_kind(kind, ParameterKind::Variadic, attribute)?;
        } else if attribute.path().is_ident(KEYWORDS_ATTRIBUTE) {
            attribute.meta.require_path_only()?;
            kind = merge_kind(kind, ParameterKind::Keywords, attribute)?;
        } else {
            kept.push(attribute.clone());
        }
    }

    let mut declaration = typed.clone();
    declaration.attrs = kept;

    Ok(CurriedParameter {
        name,
        declaration,
        kind,
    })
}

fn merge_kind(
    current: ParameterKind,
    next: ParameterKind,
    attribute: &Attribute,
) -> syn::Result<ParameterKind> {
    match current {
        ParameterKind::Required => Ok(next),
        ParameterKind::Defaulted(_) | ParameterKind::Variadic | ParameterKind::Keywords => {
            Err(syn::Error::new(
                attribute.span(),
                "a parameter takes at most one of #[default(..)], #[variadic] and #[keywords]",
            ))
        }
    }
}

fn vec_element_type(parameter_type: &Type) -> syn::Result<Type> {
    let error = || {
        syn::Error::new(
            parameter_type.span(),
            "#[variadic] parameters must have type `Vec<T>`",
        )
    };

    let Type::Path(path) = parameter_type else {
        return Err(error());
    };
    let segment = path.path.segments.last().ok_or_else(error)?;
    if segment.ident != "Vec" {
        return Err(error());
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return Err(error());
    };
    match arguments.args.first() {
        Some(GenericArgument::Type(element)) if arguments.args.len() == 1 => Ok(element.clone()),
        _ => Err(error()),
    }
}

fn map_value_type(parameter_type: &Type) -> syn::Result<Type> {
    let error = || {
        syn::Error::new(
            parameter_type.span(),
            "#[keywords] parameters must have type `HashMap<String, T>`",
        )
    };

    let Type::Path(path) = parameter_type else {
        return Err(error());
    };
    let segment = path.path.segments.last().ok_or_else(error)?;
    if segment.ident != "HashMap" {
        return Err(error());
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return Err(error());
    };
    let mut generics = arguments.args.iter();
    match (generics.next(), generics.next(), generics.next()) {
        (Some(GenericArgument::Type(Type::Path(key))), Some(GenericArgument::Type(value)), None)
            if key.path.is_ident("String") =>
        {
            Ok(value.clone())
        }
        _ => Err(error()),
    }
}

fn has_keywords_attribute(input: &FnArg) -> bool {
    match input {
        FnArg::Typed(typed) => typed
            .attrs
            .iter()
            .any(|attribute| attribute.path().is_ident(KEYWORDS_ATTRIBUTE)),
        FnArg::Receiver(_) => false,
    }
}

fn check_owned(value_type: &Type) -> syn::Result<()> {
    match value_type {
        Type::Reference(reference)
            if reference
                .lifetime
                .as_ref()
                .is_none_or(|lifetime| lifetime.ident != "static") =>
        {
            Err(syn::Error::new(
                reference.and_token.span(),
                "curried parameters cannot borrow; use an owned type or a `'static` reference",
            ))
        }
        _ => Ok(()),
    }
}

fn same_type(left: &Type, right: &Type) -> bool {
    left.to_token_stream().to_string() == right.to_token_stream().to_string()
}
