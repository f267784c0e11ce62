pub type Endpoint = str;

pub const STATIONS: &Endpoint = "/api/front/station/all?lang=tw&type=2";
