//! # Jasper Reports
//!
//! Turns a stored report definition into files a Jasper server can load.
//!
//! [`ReportResourceResolver`] writes the template into a working directory,
//! writes one `.properties` file per translation group beside it and
//! memoizes the template location per report name in a [`ReportCache`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod definition;
pub mod resolver;
pub mod subreport;

pub use cache::{MemoryReportCache, ReportCache};
pub use definition::ReportDefinition;
pub use resolver::{Resolution, ResolverOptions, ReportResourceResolver};
pub use subreport::{
    find_subreport_references, ReportCatalog, StaticReportCatalog, SubreportReference,
};
