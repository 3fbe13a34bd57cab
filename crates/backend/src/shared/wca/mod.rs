pub mod gates;
