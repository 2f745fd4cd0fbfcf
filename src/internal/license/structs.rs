pub mod license_acceptor;

pub use license_acceptor::LicenseAcceptor;
