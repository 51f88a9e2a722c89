mod gesture_map;
