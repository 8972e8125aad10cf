mod test_room_isolation;
mod test_switch_rooms;
