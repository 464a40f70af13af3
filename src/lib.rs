pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod membership {
    pub mod shape;
    pub mod constructionerror;
    pub mod membershipfunction;
    pub mod triangle;
    pub mod trapezoid;
    pub mod membershipfunctionkind;
    pub mod membershipfunctionmanager;
}
