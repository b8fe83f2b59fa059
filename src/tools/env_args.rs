//! Configuration is passed to the service as `--name=value` arguments.

use log::warn;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Retrieve the value of a `--name=value` argument passed to the service.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_arg_value` could be tricky to test.
/// To do so, wrap your test with `with_env_args(args, fn)`.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find(|arg| arg.starts_with(&arg_prefix))
        .and_then(|arg| arg.split_once('=').map(|(_, value)| value.to_owned()))
}

/// Retrieve an arg value, failing with the given error when it is missing.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

/// Retrieve and parse an arg value.
/// A missing, empty or unparsable value falls back to the default.
pub fn retrieve_parsed_arg_value<T>(arg_name: &str, default_value: T) -> T
where
    T: FromStr + Display,
{
    match retrieve_arg_value(arg_name) {
        None => default_value,
        Some(value) if value.trim().is_empty() => default_value,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("Invalid value for {arg_name}, using {default_value} instead. [value: {value}]");
            default_value
        }),
    }
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Hosts the args of the test currently running on this thread.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

#[cfg(test)]
/// Run `function` as if the service had been started with `args`.
/// Previous args are restored afterward.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    let old_value = ENV_ARGS.with(|refcell| refcell.replace(args));
    let result = function();
    ENV_ARGS.with(|refcell| refcell.replace(old_value));
    result
}
