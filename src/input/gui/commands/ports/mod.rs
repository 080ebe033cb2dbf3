pub mod presenter_factory;
