use super::RequestDescriptor;

pub fn encode_get_balance() -> RequestDescriptor {
    RequestDescriptor::get("get-balance")
}
